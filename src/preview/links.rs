use crate::config::Settings;

/// Builds the URLs a preview is reachable at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLinks {
    owner: String,
    deploy_repo: String,
    preview_dir: String,
}

impl PreviewLinks {
    pub fn new(owner: &str, deploy_repo: &str, preview_dir: &str) -> Self {
        Self {
            owner: owner.to_string(),
            deploy_repo: deploy_repo.trim_matches('/').to_string(),
            preview_dir: preview_dir.trim_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.owner,
            settings.deploy_repo(),
            &settings.preview_dir,
        )
    }

    /// In-site path, e.g. `/docusaurus-deploy/sphinx-preview/abc123/`
    pub fn relative_path(&self, id: &str) -> String {
        format!("/{}/{}/{}/", self.deploy_repo, self.preview_dir, id)
    }

    /// Absolute GitHub Pages URL; the host is always lowercase
    pub fn hosted_url(&self, id: &str) -> String {
        format!(
            "https://{}.github.io{}",
            self.owner.to_lowercase(),
            self.relative_path(id)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_nests_id_under_preview_dir() {
        let links = PreviewLinks::new("Codrad", "docusaurus-deploy", "sphinx-preview");

        assert_eq!(
            links.relative_path("abc123"),
            "/docusaurus-deploy/sphinx-preview/abc123/"
        );
    }

    #[test]
    fn hosted_url_lowercases_owner() {
        let links = PreviewLinks::new("Codrad", "docusaurus-deploy", "sphinx-preview");

        assert_eq!(
            links.hosted_url("v-3"),
            "https://codrad.github.io/docusaurus-deploy/sphinx-preview/v-3/"
        );
    }

    #[test]
    fn from_settings_uses_deploy_repo_override() {
        let settings = Settings {
            deploy_repo: Some("/site/".to_string()),
            ..Settings::default()
        };

        assert_eq!(
            PreviewLinks::from_settings(&settings).relative_path("x"),
            "/site/sphinx-preview/x/"
        );
    }
}
