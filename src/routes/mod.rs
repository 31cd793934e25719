use crate::utils::webutils::{validate_admin_token, validate_token};
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod access;
pub mod admin;
pub mod delegates;
pub mod delegation;
pub mod health;
pub mod reports;
pub mod team;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let proxy_auth = HttpAuthentication::bearer(validate_token);
    let admin_auth = HttpAuthentication::bearer(validate_admin_token);

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/access")
            .service(access::access)
            .wrap(proxy_auth.clone())
    );
    cfg.service(
        web::scope("/delegations")
            .service(delegation::create::create)
            .wrap(proxy_auth.clone())
    );
    cfg.service(
        web::scope("/delegates")
            .service(delegates::list::list)
            .service(delegates::stats::stats)
            .service(delegates::attendance::set_attendance)
            .service(delegates::delete::delete_delegate)
            .wrap(proxy_auth.clone())
    );
    cfg.service(
        web::scope("/teams")
            .service(team::delete::delete_team)
            .service(team::members::members)
            .wrap(proxy_auth.clone())
    );
    cfg.service(
        web::scope("/reports")
            .service(reports::attendance::attendance)
            .service(reports::sheet::sheet)
            .wrap(proxy_auth)
    );
    cfg.service(
        web::scope("/admin")
            .service(admin::allowed_users::seed)
            .service(admin::allowed_users::add)
            .service(admin::sample_delegates::seed_samples)
            .wrap(admin_auth)
    );
}
