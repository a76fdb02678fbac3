use std::env;
use std::fs;
use std::process;

use cqlschema_core::{UpdateSchemaConfig, validate_update_config};

fn main() {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: validate_update_config <update.toml>");
        process::exit(2);
    };

    let contents = fs::read_to_string(&path).expect("read config file");
    let config: UpdateSchemaConfig = toml::from_str(&contents).expect("parse config file");

    match validate_update_config(&config) {
        Ok(plan) => {
            let target = plan.target_version.as_deref().unwrap_or("latest");
            println!("ok: update {} to {target}", plan.target.keyspace);
        }
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            process::exit(2);
        }
    }
}
