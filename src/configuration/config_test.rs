extern crate tempdir;

use std::fs;

use anyhow::Result;
use tempdir::TempDir;

use super::Config;
use super::ConfigKey;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default();
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());

    insta::assert_snapshot!(res, @r###"
    # Request timeout in milliseconds.
    gateway-timeout = 10000

    # Base URL of the remote admin service.
    gateway-url = "http://localhost:8080"

    # Where the session credential and cached identity are persisted.
    # session-file = ""

    # Your user name shown in the console.
    # username = ""
    "###);
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let tmp_dir = TempDir::new("config")?;

    let good_path = tmp_dir.path().join("config.toml");
    fs::write(
        &good_path,
        "gateway-url = \"http://api.internal:9000\"\ngateway-timeout = 2500\n",
    )?;
    Config::load(good_path.to_str()).await?;

    assert_eq!(Config::get(ConfigKey::GatewayURL), "http://api.internal:9000");
    assert_eq!(Config::get(ConfigKey::GatewayTimeout), "2500");

    let bad_path = tmp_dir.path().join("bad-config.toml");
    fs::write(&bad_path, "gateway-timeout = \"soon\"\n")?;
    let res = Config::load(bad_path.to_str()).await;
    assert!(res.is_err());

    return Ok(());
}
