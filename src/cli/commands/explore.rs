use crate::config::Config;
use crate::errors::AppResult;
use crate::session::Session;
use std::io;

/// Handle the `explore` command (and the bare invocation)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), cfg);
    session.run()
}
