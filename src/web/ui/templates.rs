use askama::Template;
use askama_web::WebTemplate;

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub version: &'static str,
    pub default_relative_velocity_km_s: f64,
    pub default_corridor_radius_m: f64,
}
