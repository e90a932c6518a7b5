pub mod app_error;
pub mod cli;
pub mod model;
pub mod notebook;
pub mod status;
pub mod version;

pub fn run() -> i32 {
    match cli::run_cli() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            err.code()
        }
    }
}
