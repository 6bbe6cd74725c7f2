// Route exports
pub mod restaurants;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // The browser frontend calls these paths directly, so no versioned scope.
    cfg.configure(restaurants::configure);
}
