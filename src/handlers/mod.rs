pub mod ads;
pub mod forum;
pub mod freelancers;
pub mod meta;
pub mod portfolio;
pub mod reservations;

use actix_web::web;

/// Treat an empty query value (`?skill=`) the same as an absent one, so the
/// listing stays unfiltered instead of matching against the empty string.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Meta / diagnostics ──
    cfg.route("/", web::get().to(meta::read_root));
    cfg.route("/api/hello", web::get().to(meta::hello));
    cfg.route("/test", web::get().to(meta::test_database));

    // ── Freelancers ──
    cfg.service(
        web::resource("/freelancers")
            .route(web::get().to(freelancers::list_freelancers))
            .route(web::post().to(freelancers::create_freelancer)),
    );

    // ── Portfolio ──
    cfg.service(
        web::resource("/portfolio")
            .route(web::get().to(portfolio::list_portfolio))
            .route(web::post().to(portfolio::add_portfolio)),
    );

    // ── Reservations ──
    cfg.service(
        web::resource("/reservations")
            .route(web::get().to(reservations::list_reservations))
            .route(web::post().to(reservations::create_reservation)),
    );

    // ── Advertisements ──
    cfg.service(
        web::resource("/ads")
            .route(web::get().to(ads::list_ads))
            .route(web::post().to(ads::create_ad)),
    );

    // ── Forum ──
    cfg.service(
        web::scope("/forum")
            .route("/threads", web::get().to(forum::list_threads))
            .route("/threads", web::post().to(forum::create_thread))
            .route("/posts", web::get().to(forum::list_posts))
            .route("/posts", web::post().to(forum::create_post)),
    );
}
