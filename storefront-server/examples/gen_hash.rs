//! Print an Argon2 hash for manual admin provisioning
//!
//! ```text
//! cargo run -p storefront-server --example gen_hash -- <password>
//! ```

fn main() {
    let Some(password) = std::env::args().nth(1) else {
        eprintln!("usage: gen_hash <password>");
        std::process::exit(2);
    };
    match storefront_server::auth::hash_password(&password) {
        Ok(hash) => println!("{hash}"),
        Err(e) => {
            eprintln!("failed to hash password: {e}");
            std::process::exit(1);
        }
    }
}
