//! Product subcommand implementations.
//!
//! Reading the catalogue requires a session; mutations additionally require
//! the admin role, mirroring the server's own gating.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use mercat::RoutePolicy;
use mercat::api::ProductDraft;

use crate::output;

use super::AppContext;

#[derive(Args, Debug)]
pub struct ProductsCommand {
    #[command(subcommand)]
    pub command: ProductsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProductsSubcommand {
    /// List all products
    List(ListArgs),

    /// Fetch a single product
    Show(ShowArgs),

    /// Create a product (admin)
    Create(DraftArgs),

    /// Update a product (admin)
    Update(UpdateArgs),

    /// Delete a product (admin)
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output raw JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Product id
    pub id: String,
}

#[derive(Args, Debug)]
pub struct DraftArgs {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Product description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Price
    #[arg(long)]
    pub price: f64,

    /// Stock quantity
    #[arg(long)]
    pub stock: i64,

    /// Category id
    #[arg(long)]
    pub category_id: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Product id
    pub id: String,

    #[command(flatten)]
    pub draft: DraftArgs,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Product id
    pub id: String,
}

impl From<DraftArgs> for ProductDraft {
    fn from(args: DraftArgs) -> Self {
        ProductDraft {
            name: args.name,
            description: args.description,
            price: args.price,
            stock: args.stock,
            category_id: args.category_id,
        }
    }
}

pub async fn run(ctx: &AppContext, cmd: ProductsCommand) -> Result<()> {
    match cmd.command {
        ProductsSubcommand::List(args) => list(ctx, args).await,
        ProductsSubcommand::Show(args) => show(ctx, args).await,
        ProductsSubcommand::Create(args) => create(ctx, args).await,
        ProductsSubcommand::Update(args) => update(ctx, args).await,
        ProductsSubcommand::Delete(args) => delete(ctx, args).await,
    }
}

async fn list(ctx: &AppContext, args: ListArgs) -> Result<()> {
    super::require(ctx, &RoutePolicy::Authenticated)?;

    let products = ctx
        .client
        .list_products()
        .await
        .context("Failed to fetch products")?;

    if args.json {
        return output::json_pretty(&products);
    }

    for product in &products {
        println!(
            "{}  {} - ${:.2} ({} in stock)",
            product.product_id, product.name, product.price, product.stock
        );
    }
    Ok(())
}

async fn show(ctx: &AppContext, args: ShowArgs) -> Result<()> {
    super::require(ctx, &RoutePolicy::Authenticated)?;

    let product = ctx
        .client
        .get_product(&args.id)
        .await
        .context("Failed to fetch product")?;

    output::json_pretty(&product)
}

async fn create(ctx: &AppContext, args: DraftArgs) -> Result<()> {
    super::require(ctx, &RoutePolicy::admin())?;

    let product = ctx
        .client
        .create_product(&args.into())
        .await
        .context("Failed to create product")?;

    output::success(&format!("Created product {}", product.product_id));
    Ok(())
}

async fn update(ctx: &AppContext, args: UpdateArgs) -> Result<()> {
    super::require(ctx, &RoutePolicy::admin())?;

    let product = ctx
        .client
        .update_product(&args.id, &args.draft.into())
        .await
        .context("Failed to update product")?;

    output::success(&format!("Updated product {}", product.product_id));
    Ok(())
}

async fn delete(ctx: &AppContext, args: DeleteArgs) -> Result<()> {
    super::require(ctx, &RoutePolicy::admin())?;

    ctx.client
        .delete_product(&args.id)
        .await
        .context("Failed to delete product")?;

    output::success(&format!("Deleted product {}", args.id));
    Ok(())
}
