use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    bin_name = "shelf",
    version,
    disable_help_subcommand = true,
    about = "Manage and serve an affiliate product catalog",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory holding products.json (overrides config)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Config file to load
    #[arg(long = "config", global = true, value_name = "FILE", help_heading = "Options")]
    pub config_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products, all categories or one
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only this category (exact key)
        #[arg(short, long)]
        category: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List category keys
    #[command(display_order = 2)]
    Categories {
        /// Print JSON instead of plain lines
        #[arg(long)]
        json: bool,
    },

    /// Add a product
    #[command(alias = "new", display_order = 3)]
    Add(AddArgs),

    /// Delete a product by category and id
    #[command(alias = "rm", display_order = 4)]
    Delete {
        /// Category key
        category: String,

        /// Product id within the category
        id: u64,
    },

    /// Check the catalog file for problems
    #[command(display_order = 10)]
    Doctor,

    /// Create the data directory and an empty catalog
    #[command(display_order = 11)]
    Init,

    /// Print a commented config file with every setting
    #[command(display_order = 12)]
    Config,

    /// Run the HTTP server
    #[command(display_order = 20)]
    Serve {
        /// Listen address (overrides config)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Category key
    #[arg(long)]
    pub category: String,

    /// Product name
    #[arg(long)]
    pub name: String,

    /// External purchase URL
    #[arg(long = "link", value_name = "URL")]
    pub affiliate_link: String,

    #[arg(long, value_name = "PRICE")]
    pub original_price: Option<f64>,

    #[arg(long, value_name = "PRICE")]
    pub sale_price: Option<f64>,

    /// Used only when the discount cannot be derived from the prices
    #[arg(long, value_name = "PERCENT")]
    pub discount: Option<i64>,

    /// 0 to 5
    #[arg(long)]
    pub rating: Option<f64>,

    #[arg(long)]
    pub reviews: Option<u64>,

    /// Image URL (placeholder when omitted)
    #[arg(long, value_name = "URL")]
    pub image: Option<String>,

    /// Feature line, repeatable; commas split further
    #[arg(long = "feature", value_name = "TEXT")]
    pub features: Vec<String>,

    #[arg(long)]
    pub badge: Option<String>,
}
