use anyhow::Result;
use taskdesk_cli::tasks_app::TasksApp;

fn main() -> Result<()> {
    TasksApp::new().run()
}
