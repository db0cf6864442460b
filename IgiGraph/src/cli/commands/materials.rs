//! Material table listing

use crate::formats::graph::{Material, UNKNOWN_MATERIAL};

pub fn execute() -> anyhow::Result<()> {
    println!("Code  Material");
    println!("----  --------");
    for material in Material::ALL {
        println!("{:>4}  {}", material.code(), material.name());
    }
    println!("  *   {UNKNOWN_MATERIAL}");
    Ok(())
}
