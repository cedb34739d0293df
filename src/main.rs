//! # cafe
//!
//! Command-line administration of a café data directory. Every command starts the
//! actor system over the directory's JSON files, performs one operation, prints the
//! result as JSON and shuts down.
//!
//! ```bash
//! cafe --dir data inventory add --id milk --name Milk --quantity 10 --unit ml
//! cafe --dir data menu add --id latte --name Latte --price 3.5 --ingredient milk=2
//! cafe --dir data orders create --customer Ada --item latte=3
//! cafe --dir data orders close order1
//! ```

use cafe_orders::config::CafeConfig;
use cafe_orders::lifecycle::{setup_tracing, CafeSystem};
use cafe_orders::model::{
    InventoryItem, LineItem, MenuItem, OrderCreate, OrderId, OrderUpdate, RecipeLine,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "cafe", version, about = "Café order and inventory management")]
struct Cli {
    #[command(flatten)]
    config: CafeConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(subcommand)]
    /// Products and their recipes
    Menu(MenuCommand),
    #[command(subcommand)]
    /// Ingredient stock levels
    Inventory(InventoryCommand),
    #[command(subcommand)]
    /// Customer orders
    Orders(OrdersCommand),
}

#[derive(Debug, Subcommand)]
enum MenuCommand {
    /// List every product
    List,
    /// Add a product to the menu
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,
        #[arg(long, default_value = "")]
        description: String,
        /// Recipe line as INGREDIENT=AMOUNT_PER_UNIT; repeat for several ingredients
        #[arg(long = "ingredient", value_parser = parse_recipe_line)]
        ingredients: Vec<RecipeLine>,
    },
    /// Remove a product from the menu
    Delete {
        #[arg(required = true, index = 1)]
        id: String,
    },
}

#[derive(Debug, Subcommand)]
enum InventoryCommand {
    /// List every ingredient
    List,
    /// Start tracking an ingredient
    Add {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        quantity: f64,
        #[arg(long, default_value = "")]
        unit: String,
    },
    /// Add a signed amount to an ingredient's stock
    Adjust {
        #[arg(required = true, index = 1)]
        id: String,
        #[arg(required = true, index = 2, allow_negative_numbers = true)]
        delta: f64,
    },
    /// Stop tracking an ingredient
    Delete {
        #[arg(required = true, index = 1)]
        id: String,
    },
}

#[derive(Debug, Subcommand)]
enum OrdersCommand {
    /// List every order
    List,
    /// Fetch the order with the given ID
    Get {
        #[arg(required = true, index = 1)]
        id: OrderId,
    },
    /// Place an order, reserving its ingredients
    Create {
        #[arg(long)]
        customer: String,
        /// Line item as PRODUCT=QUANTITY; repeat for several products
        #[arg(long = "item", required = true, value_parser = parse_line_item)]
        items: Vec<LineItem>,
    },
    /// Edit an open order; omitted fields keep their value
    Update {
        #[arg(required = true, index = 1)]
        id: OrderId,
        #[arg(long)]
        customer: Option<String>,
        #[arg(long = "item", value_parser = parse_line_item)]
        items: Vec<LineItem>,
    },
    /// Close an open order
    Close {
        #[arg(required = true, index = 1)]
        id: OrderId,
    },
    /// Delete an order, returning its ingredients
    Delete {
        #[arg(required = true, index = 1)]
        id: OrderId,
    },
}

fn split_pair(s: &str) -> Result<(&str, &str), String> {
    s.split_once('=')
        .filter(|(key, value)| !key.is_empty() && !value.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))
}

fn parse_recipe_line(s: &str) -> Result<RecipeLine, String> {
    let (ingredient, amount) = split_pair(s)?;
    let amount = amount
        .parse::<f64>()
        .map_err(|e| format!("invalid amount `{amount}`: {e}"))?;
    Ok(RecipeLine::new(ingredient, amount))
}

fn parse_line_item(s: &str) -> Result<LineItem, String> {
    let (product, quantity) = split_pair(s)?;
    let quantity = quantity
        .parse::<u32>()
        .map_err(|e| format!("invalid quantity `{quantity}`: {e}"))?;
    Ok(LineItem::new(product, quantity))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

async fn run_menu(system: &CafeSystem, command: MenuCommand) -> CliResult {
    let menu = &system.menu_client;
    match command {
        MenuCommand::List => print_json(&menu.list_all().await?)?,
        MenuCommand::Add {
            id,
            name,
            price,
            description,
            ingredients,
        } => {
            let mut item = MenuItem::new(id.as_str(), name, price).with_description(description);
            item.ingredients = ingredients;
            print_json(&menu.add_item(item.into()).await?)?;
        }
        MenuCommand::Delete { id } => {
            menu.delete_item(id.as_str().into()).await?;
            info!(product_id = %id, "Deleted menu item");
        }
    }
    Ok(())
}

async fn run_inventory(system: &CafeSystem, command: InventoryCommand) -> CliResult {
    let inventory = &system.inventory_client;
    match command {
        InventoryCommand::List => print_json(&inventory.list_all().await?)?,
        InventoryCommand::Add {
            id,
            name,
            quantity,
            unit,
        } => {
            let item = InventoryItem::new(id.as_str(), name, quantity, unit);
            print_json(&inventory.add_item(item.into()).await?)?;
        }
        InventoryCommand::Adjust { id, delta } => {
            inventory.adjust(id.as_str().into(), delta).await?;
            print_json(&inventory.get_item(id.as_str().into()).await?)?;
        }
        InventoryCommand::Delete { id } => {
            inventory.delete_item(id.as_str().into()).await?;
            info!(ingredient_id = %id, "Deleted inventory item");
        }
    }
    Ok(())
}

async fn run_orders(system: &CafeSystem, command: OrdersCommand) -> CliResult {
    let orders = &system.order_client;
    match command {
        OrdersCommand::List => print_json(&orders.list_orders().await?)?,
        OrdersCommand::Get { id } => print_json(&orders.get_order(id).await?)?,
        OrdersCommand::Create { customer, items } => {
            print_json(&orders.create_order(OrderCreate::new(customer, items)).await?)?;
        }
        OrdersCommand::Update {
            id,
            customer,
            items,
        } => {
            let update = OrderUpdate {
                customer_name: customer,
                items: Some(items),
            };
            print_json(&orders.update_order(id, update).await?)?;
        }
        OrdersCommand::Close { id } => {
            orders.close_order(id).await?;
            print_json(&orders.get_order(id).await?)?;
        }
        OrdersCommand::Delete { id } => {
            orders.delete_order(id).await?;
            info!(order_id = %id, "Deleted order");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> CliResult {
    setup_tracing();
    let cli = Cli::parse();

    let system = CafeSystem::open(&cli.config)?;
    let result = match cli.command {
        Command::Menu(command) => run_menu(&system, command).await,
        Command::Inventory(command) => run_inventory(&system, command).await,
        Command::Orders(command) => run_orders(&system, command).await,
    };
    if let Err(e) = &result {
        error!(error = %e, "Command failed");
    }

    system.shutdown().await?;
    result
}
