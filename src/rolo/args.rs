use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "Personal contacts and notes book for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage contacts
    #[command(subcommand, alias = "c")]
    Contact(ContactCmd),

    /// Manage notes
    #[command(subcommand, alias = "n")]
    Note(NoteCmd),
}

#[derive(Subcommand, Debug)]
pub enum ContactCmd {
    /// Add a new contact
    #[command(alias = "a")]
    Add {
        /// Contact name (letters only)
        name: String,

        /// Phone number, optionally labeled (e.g. "380951234567:home")
        #[arg(short, long)]
        phone: Vec<String>,

        /// Email address, optionally labeled (e.g. "a@b.com:work")
        #[arg(short, long)]
        email: Vec<String>,

        /// Birthday as YYYY-MM-DD
        #[arg(short, long)]
        birthday: Option<String>,
    },

    /// Replace a contact's data (the whole record is re-entered)
    #[command(alias = "edit")]
    Update {
        /// Current contact name
        name: String,

        /// New name, when renaming
        #[arg(long)]
        rename: Option<String>,

        #[arg(short, long)]
        phone: Vec<String>,

        #[arg(short, long)]
        email: Vec<String>,

        #[arg(short, long)]
        birthday: Option<String>,
    },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete {
        name: String,
    },

    /// List all contacts
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Debug)]
pub enum NoteCmd {
    /// Add a new note
    #[command(alias = "a")]
    Add {
        /// Note body
        text: String,

        /// Optional display name for the note
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Replace a note's body and name, keeping its id
    #[command(alias = "edit")]
    Update {
        /// Note id as shown by `note ls`
        id: u64,

        text: String,

        #[arg(short, long)]
        name: Option<String>,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        id: u64,
    },

    /// List all notes
    #[command(alias = "ls")]
    List,
}
