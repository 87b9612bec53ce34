//! Storefront CLI - a headless consumer of the resource stores
//!
//! Each subcommand plays the part of one page interaction: mount the
//! page, fire the user event, wait for the effects to settle, and render
//! the resulting resource view as text.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use storefront::models::User;
use storefront::{AppContext, BackendConfig, HttpApi};

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Browse the cart, orders and profile of a storefront account")]
struct Args {
    /// Backend base URL (defaults to STOREFRONT_API_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Customer id, required for profile commands
    #[arg(long, default_value_t = 0)]
    user_id: u64,

    /// Access token, required for profile commands
    #[arg(long, default_value = "")]
    token: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the cart list
    Cart,
    /// Remove one item from the cart
    Remove { id: u64 },
    /// Change one cart item's count
    SetCount { id: u64, count: u32 },
    /// Show the order history
    Orders,
    /// Change the account username
    Rename { username: String },
    /// Close the account
    Delete { password: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = match &args.base_url {
        Some(url) => BackendConfig::new(url.clone()),
        None => BackendConfig::from_env(),
    };
    let api = Arc::new(HttpApi::new(config));
    let user = User {
        id: args.user_id,
        username: String::new(),
        email: String::new(),
        access_token: args.token.clone(),
    };
    let mut ctx = AppContext::new(api, user);

    let result = match args.command {
        Command::Cart => show_cart(&mut ctx).await,
        Command::Remove { id } => {
            ctx.cart.remove_item(id);
            show_cart(&mut ctx).await
        }
        Command::SetCount { id, count } => {
            ctx.cart.set_item_count(id, count);
            show_cart(&mut ctx).await
        }
        Command::Orders => show_orders(&mut ctx).await,
        Command::Rename { username } => rename(&mut ctx, &username).await,
        Command::Delete { password } => delete_account(&mut ctx, &password).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(alert) => {
            eprintln!("{alert}");
            ExitCode::FAILURE
        }
    }
}

async fn show_cart(ctx: &mut AppContext) -> Result<(), storefront::pages::PageAlert> {
    ctx.cart.load();
    ctx.cart.settle().await?;

    let view = ctx.cart.view();
    if view.has_error() {
        eprintln!("{}", view.error_message);
        return Ok(());
    }
    if view.data.is_empty() {
        println!("The cart is empty.");
        return Ok(());
    }
    for item in view.data {
        println!("#{:<6} {:<24} x{:<4} {} won", item.id, item.name, item.count, item.price);
    }
    Ok(())
}

async fn show_orders(ctx: &mut AppContext) -> Result<(), storefront::pages::PageAlert> {
    ctx.orders.load();
    ctx.orders.settle().await?;

    let view = ctx.orders.view();
    if view.has_error() {
        eprintln!("{}", view.error_message);
        return Ok(());
    }
    if view.data.is_empty() {
        println!("No orders yet.");
        return Ok(());
    }
    for order in view.data {
        println!("order #{} ({} items)", order.id, order.details.len());
        for line in &order.details {
            println!("  {:<24} x{:<4} {} won", line.name, line.count, line.price);
        }
    }
    Ok(())
}

async fn rename(ctx: &mut AppContext, username: &str) -> Result<(), storefront::pages::PageAlert> {
    ctx.user.begin_edit();
    ctx.user.set_draft(username);
    if !ctx.user.validation_error().is_empty() {
        eprintln!("{}", ctx.user.validation_error());
        return Ok(());
    }

    ctx.user.confirm_edit();
    ctx.user.settle().await?;

    if let Some(alert) = ctx.user.alert() {
        eprintln!("{alert}");
        return Ok(());
    }
    let view = ctx.user.view();
    if view.has_error() {
        eprintln!("{}", view.error_message);
        return Ok(());
    }
    println!("Username is now {:?}.", view.data.username);
    Ok(())
}

async fn delete_account(
    ctx: &mut AppContext,
    password: &str,
) -> Result<(), storefront::pages::PageAlert> {
    ctx.user.open_delete_modal();
    ctx.user.delete_account(password);
    ctx.user.settle().await?;

    if let Some(alert) = ctx.user.alert() {
        eprintln!("{alert}");
        return Ok(());
    }
    let view = ctx.user.view();
    if view.has_error() {
        eprintln!("{}", view.error_message);
        return Ok(());
    }
    if ctx.user.is_signed_out() {
        println!("Account deleted. You are signed out.");
    }
    Ok(())
}
