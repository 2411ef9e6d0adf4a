use anyhow::Result;
use taskdesk_cli::calc_app::CalcApp;

fn main() -> Result<()> {
    CalcApp::new().run()
}
