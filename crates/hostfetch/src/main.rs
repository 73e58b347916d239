//! CLI entrypoint for hostfetch.

use anyhow::Result;
use hostfetch::Application;

fn main() -> Result<()> {
    Application::new().run()
}
