use serde::Deserialize;

/// Latest-release record as returned by the registry. Only the asset list is
/// read; everything else in the payload is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// One downloadable file belonging to a published release.
#[derive(Clone, Debug, Deserialize)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
}
