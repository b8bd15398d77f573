use super::*;

impl RegistryClient {
    /// Fetch the asset's bytes. A single attempt: any network failure or
    /// non-success status ends the run with nothing installed.
    pub fn download_asset(&self, asset: &Asset) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(&asset.browser_download_url)
            .send()
            .with_context(|| format!("download {}", asset.name))?;
        let resp = resp
            .error_for_status()
            .with_context(|| format!("download {} status", asset.name))?;
        let bytes = resp
            .bytes()
            .with_context(|| format!("read {} body", asset.name))?;
        Ok(bytes.to_vec())
    }
}
