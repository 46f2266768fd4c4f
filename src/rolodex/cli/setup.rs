use clap::{Args, Parser, Subcommand};
use rolodex::api::{Field, FieldValues};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", bin_name = "rolodex", version)]
#[command(about = "Keep a small address book in an XML file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Address book file to use instead of the remembered one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List contacts
    #[command(alias = "ls")]
    List,

    /// Show one contact in full
    #[command(alias = "v")]
    Show {
        /// Index of the contact (as shown by `list`)
        index: usize,
    },

    /// Add a contact
    #[command(alias = "n")]
    Add {
        first_name: String,

        last_name: String,

        #[command(flatten)]
        address: AddressArgs,
    },

    /// Change fields of a contact
    #[command(alias = "e")]
    Edit {
        /// Index of the contact (as shown by `list`)
        index: usize,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[command(flatten)]
        address: AddressArgs,
    },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete {
        /// Index of the contact (as shown by `list`)
        index: usize,
    },

    /// Load an address book file and remember it
    Open { path: PathBuf },

    /// Save the address book to a new file and remember it
    Save { path: PathBuf },

    /// Print the remembered address book file
    Path {
        /// Forget the remembered file
        #[arg(long)]
        forget: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (seed-samples, restore-last)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct AddressArgs {
    #[arg(long)]
    pub street: Option<String>,

    #[arg(long)]
    pub postal_code: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// Birthday as YYYY-MM-DD (empty to clear)
    #[arg(long)]
    pub birthday: Option<String>,
}

impl AddressArgs {
    /// Values given on the command line, in field order.
    pub fn into_values(
        self,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> FieldValues {
        [
            (Field::FirstName, first_name),
            (Field::LastName, last_name),
            (Field::Street, self.street),
            (Field::PostalCode, self.postal_code),
            (Field::City, self.city),
            (Field::Birthday, self.birthday),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}
