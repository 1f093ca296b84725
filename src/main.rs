// src/main.rs

use anyhow::{
    bail,
    Result,
};
use code_tour::{
    catalog,
    session::Session,
};
use std::io;

fn main() -> Result<()> {
    let root = std::env::current_dir()?;
    if !root.join(catalog::PROJECT_MANIFEST).exists() {
        bail!(
            "no {} found in {} - run the tour from the project root",
            catalog::PROJECT_MANIFEST,
            root.display()
        );
    }

    let session = Session::new(root, catalog::TOUR_STOPS);
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
