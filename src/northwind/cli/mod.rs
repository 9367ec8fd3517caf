//! # CLI Layer
//!
//! This module is **one possible client** of the northwind library. It is the
//! only place that knows about stdout, stderr and exit codes.
//!
//! Every invocation builds one [`CustomerManager`] over an [`InMemoryStore`].
//! A one-shot command therefore sees a freshly seeded store; the `shell`
//! command keeps the same manager (and its selected customer) alive for every
//! line read from stdin.
//!
//! ## Structure
//!
//! - `run()`: parse arguments, set up logging and the session, dispatch
//! - `dispatch()`: one command against the session, shared with the shell
//! - `handle_*()`: per-command handlers that call the manager and print
//!
//! `config KEY VALUE` writes `config.json` in the config directory. Seeding
//! and the log level are read at startup, so they apply from the next
//! invocation; a shell picks up a new prompt straight away.
//! - `print`: output formatting
//! - `shell`: the line-oriented session loop

mod print;
mod shell;

use crate::args::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use log::debug;
use northwind::config::{self, NorthwindConfig};
use northwind::error::{NorthwindError, Result};
use northwind::manager::CustomerManager;
use northwind::model::CustomerUpdate;
use northwind::seed::sample_customers;
use northwind::store::memory::InMemoryStore;
use northwind::store::CustomerStore;
use print::{print_customer, print_customers, print_info, print_json, print_success};
use std::path::PathBuf;

pub(crate) struct AppContext<S: CustomerStore> {
    manager: CustomerManager<S>,
    config: NorthwindConfig,
    config_dir: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_dir = resolve_config_dir(cli.config_dir.clone());
    let config = match &config_dir {
        Some(dir) => NorthwindConfig::load(dir)?,
        None => NorthwindConfig::default(),
    };
    init_logging(cli.verbose, &config);

    let mut ctx = init_context(&cli, config, config_dir)?;

    match cli.command {
        None | Some(Commands::Shell) => shell::run(&mut ctx),
        Some(command) => dispatch(&mut ctx, command),
    }
}

fn resolve_config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        ProjectDirs::from("com", "northwind", "northwind").map(|dirs| dirs.config_dir().to_path_buf())
    })
}

fn init_logging(verbose: bool, config: &NorthwindConfig) {
    let level = if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

fn init_context(
    cli: &Cli,
    config: NorthwindConfig,
    config_dir: Option<PathBuf>,
) -> Result<AppContext<InMemoryStore>> {
    let store = if config.seed_sample_data && !cli.no_seed {
        InMemoryStore::with_customers(sample_customers())?
    } else {
        InMemoryStore::new()
    };
    debug!("session store holds {} customers", store.len());

    Ok(AppContext {
        manager: CustomerManager::new(store),
        config,
        config_dir,
    })
}

pub(crate) fn dispatch<S: CustomerStore>(ctx: &mut AppContext<S>, command: Commands) -> Result<()> {
    match command {
        Commands::Create {
            id,
            contact,
            company,
            city,
        } => handle_create(ctx, &id, &contact, &company, city.as_deref()),
        Commands::Update {
            id,
            contact,
            country,
            city,
            postal_code,
        } => {
            let changes = CustomerUpdate::new(
                contact.as_deref(),
                country.as_deref(),
                city.as_deref(),
                postal_code.as_deref(),
            );
            handle_update(ctx, &id, changes)
        }
        Commands::Delete { id } => handle_delete(ctx, &id),
        Commands::List { json } => handle_list(ctx, json),
        Commands::Show { id, json } => handle_show(ctx, &id, json),
        Commands::Select { id } => handle_select(ctx, &id),
        Commands::Selected => handle_selected(ctx),
        Commands::Config { key, value } => handle_config(ctx, key.as_deref(), value.as_deref()),
        Commands::Shell => Err(NorthwindError::Cli("already in a shell session".into())),
    }
}

fn handle_create<S: CustomerStore>(
    ctx: &mut AppContext<S>,
    id: &str,
    contact: &str,
    company: &str,
    city: Option<&str>,
) -> Result<()> {
    let customer = ctx.manager.create(id, contact, company, city)?;
    print_success(&format!("Customer created: {}", customer.customer_id));
    Ok(())
}

fn handle_update<S: CustomerStore>(
    ctx: &mut AppContext<S>,
    id: &str,
    changes: CustomerUpdate,
) -> Result<()> {
    if changes.is_empty() {
        return Err(NorthwindError::Cli(
            "nothing to update: pass --contact, --country, --city or --postal-code".into(),
        ));
    }
    let customer = ctx.manager.try_update(id, &changes)?;
    print_success(&format!("Customer updated: {}", customer.customer_id));
    Ok(())
}

fn handle_delete<S: CustomerStore>(ctx: &mut AppContext<S>, id: &str) -> Result<()> {
    let customer = ctx.manager.try_delete(id)?;
    print_success(&format!("Customer deleted: {}", customer.customer_id));
    Ok(())
}

fn handle_list<S: CustomerStore>(ctx: &mut AppContext<S>, json: bool) -> Result<()> {
    let customers = ctx.manager.retrieve_all();
    if json {
        return print_json(&customers);
    }
    print_customers(&customers);
    Ok(())
}

fn handle_show<S: CustomerStore>(ctx: &mut AppContext<S>, id: &str, json: bool) -> Result<()> {
    let customer = ctx
        .manager
        .retrieve(id)
        .ok_or_else(|| NorthwindError::NotFound(id.to_string()))?;
    if json {
        return print_json(&customer);
    }
    print_customer(&customer);
    Ok(())
}

fn handle_select<S: CustomerStore>(ctx: &mut AppContext<S>, id: &str) -> Result<()> {
    let customer = ctx
        .manager
        .store()
        .get_by_id(id)
        .ok_or_else(|| NorthwindError::NotFound(id.to_string()))?;
    ctx.manager.set_selected_customer(customer);
    print_info(&format!("Selected: {}", id));
    Ok(())
}

fn handle_selected<S: CustomerStore>(ctx: &mut AppContext<S>) -> Result<()> {
    match ctx.manager.selected_customer() {
        Some(customer) => print_customer(customer),
        None => print_info("No customer selected."),
    }
    Ok(())
}

fn handle_config<S: CustomerStore>(
    ctx: &mut AppContext<S>,
    key: Option<&str>,
    value: Option<&str>,
) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in config::KEYS {
                if let Some(value) = ctx.config.get(key) {
                    println!("{} = {}", key, value);
                }
            }
        }
        (Some(key), None) => {
            let value = ctx.config.get(key).ok_or_else(|| config::unknown_key(key))?;
            println!("{}", value);
        }
        (Some(key), Some(value)) => {
            let dir = ctx
                .config_dir
                .clone()
                .ok_or_else(|| NorthwindError::Config("no config directory available".into()))?;
            ctx.config.set(key, value)?;
            ctx.config.save(&dir)?;
            debug!("saved {} to {}", key, dir.display());
            print_success(&format!("{} = {}", key, value));
        }
    }
    Ok(())
}
