//! Order subcommand implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use mercat::RoutePolicy;

use crate::output;

use super::AppContext;

#[derive(Args, Debug)]
pub struct OrdersCommand {
    #[command(subcommand)]
    pub command: OrdersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum OrdersSubcommand {
    /// List your orders
    List(ListArgs),

    /// Fetch a single order with its items
    Show(ShowArgs),

    /// Cancel a pending order
    Cancel(CancelArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output raw JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Order id
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CancelArgs {
    /// Order id
    pub id: String,
}

pub async fn run(ctx: &AppContext, cmd: OrdersCommand) -> Result<()> {
    super::require(ctx, &RoutePolicy::Authenticated)?;

    match cmd.command {
        OrdersSubcommand::List(args) => list(ctx, args).await,
        OrdersSubcommand::Show(args) => show(ctx, args).await,
        OrdersSubcommand::Cancel(args) => cancel(ctx, args).await,
    }
}

async fn list(ctx: &AppContext, args: ListArgs) -> Result<()> {
    let orders = ctx
        .client
        .list_orders()
        .await
        .context("Failed to fetch orders")?;

    if args.json {
        return output::json_pretty(&orders);
    }

    if orders.is_empty() {
        println!("You have no orders yet.");
        return Ok(());
    }

    for order in &orders {
        println!(
            "Order {} - {} - ${:.2}",
            order.order_id, order.status, order.total_amount
        );
    }
    Ok(())
}

async fn show(ctx: &AppContext, args: ShowArgs) -> Result<()> {
    let order = ctx
        .client
        .get_order(&args.id)
        .await
        .context("Failed to fetch order details")?;

    output::field("Order", &order.order_id);
    output::field("Status", &order.status);
    output::field("Total", &format!("${:.2}", order.total_amount));
    for item in &order.items {
        println!("  {} - ${:.2} x {}", item.product_name, item.price, item.quantity);
    }
    Ok(())
}

async fn cancel(ctx: &AppContext, args: CancelArgs) -> Result<()> {
    ctx.client
        .cancel_order(&args.id)
        .await
        .context("Failed to cancel order")?;

    output::success(&format!("Cancelled order {}", args.id));
    Ok(())
}
