//! Print an argon2 hash for seeding accounts:
//! `cargo run -p server --features server --bin hash_password -- <password>`

use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(password) = std::env::args().nth(1) else {
        eprintln!("usage: hash_password <password>");
        return ExitCode::FAILURE;
    };
    match server::auth::password::hash_password(&password) {
        Ok(hash) => {
            println!("{hash}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("hashing failed: {e}");
            ExitCode::FAILURE
        }
    }
}
