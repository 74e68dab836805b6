use crate::routes::{api, health};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "mindful-server",
    description = "Mood journal and wellness companion API",
    version = "0.1.0"
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(health::HealthApi::openapi());
    root.merge(api::api_docs());
    root
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn docs_list_every_route() {
        let doc = get_docs();
        for path in [
            "/health",
            "/api/chat",
            "/api/chat/history",
            "/api/respond",
            "/api/mood",
            "/api/mood/recent",
            "/api/crisis-resources",
            "/api/daily-tip",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
