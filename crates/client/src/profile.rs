use crate::error::{check, ClientResult};
use crate::models::HospitalProfile;
use crate::BackendClient;

impl BackendClient {
    pub async fn fetch_hospital_profile(&self, token: &str) -> ClientResult<HospitalProfile> {
        let resp = self.get("/auth/get-hospital-profile", token).send().await?;
        let profile = check(resp, "Failed to fetch profile data")
            .await?
            .json::<HospitalProfile>()
            .await?;
        Ok(profile)
    }

    pub async fn update_hospital_profile(
        &self,
        token: &str,
        profile: &HospitalProfile,
    ) -> ClientResult<()> {
        let resp = self
            .post("/auth/update-hospital-profile", token)
            .json(profile)
            .send()
            .await?;
        check(resp, "Failed to update profile").await?;
        Ok(())
    }

    /// Unauthenticated liveness probe. The health endpoint lives above the
    /// `/api` prefix.
    pub async fn backend_health(&self) -> bool {
        let url = self
            .base_url
            .strip_suffix("/api")
            .map(|root| format!("{root}/health"))
            .unwrap_or_else(|| self.url("/health"));
        match self.client.get(url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}
