use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};

use nomad_data::{Filter, Query, User, UserManagement};
use nomad_db::Connection;
use nomad_queries::{create, find_user_management, find_user_manager};

use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Users {
    /// Add a user
    #[clap(name = "add")]
    Add(AddUser),
    /// Show a user with the manager role
    #[clap(name = "manager")]
    Manager(ShowManager),
}

impl Users {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Users::Add(cmd) => cmd.run(db).await,
            Users::Manager(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddUser {
    #[clap(short, long)]
    pub first_name: String,
    #[clap(short, long)]
    pub last_name: String,
    #[clap(short, long)]
    pub email: String,
    #[clap(short, long, default_value = "requester")]
    pub role: String,
}

impl AddUser {
    /// Run the command and add a user to the database
    pub async fn run(self, db: &Connection) -> Result<()> {
        // Check if a user with this email already exists
        let users: Vec<User> = db.query(&Filter::eq("email", self.email.as_str())).await?;
        if !users.is_empty() {
            return Err(anyhow!("User with email {} already exists.", self.email));
        }

        let user = User {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role: self.role,
            ..Default::default()
        };
        let user = create(db, user).await?;
        println!("User added with id {}.", user.id);
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ShowManager {
    #[clap(short, long)]
    pub id: i64,
}

impl ShowManager {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let manager: User = find_user_manager(db, self.id)
            .await?
            .ok_or_else(|| anyhow!("User {} is not a manager.", self.id))?;
        println!();
        manager.print_formatted();
        println!();
        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum Managements {
    /// Assign a user to a line manager
    #[clap(name = "add")]
    Add(AddManagement),
    /// List the managers of a user
    #[clap(name = "list")]
    List(ListManagements),
}

impl Managements {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Managements::Add(cmd) => cmd.run(db).await,
            Managements::List(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddManagement {
    #[clap(short, long)]
    pub user: i64,
    #[clap(short, long)]
    pub manager: i64,
}

impl AddManagement {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let manager: Option<User> = find_user_manager(db, self.manager).await?;
        if manager.is_none() {
            return Err(anyhow!("User {} is not a manager.", self.manager));
        }
        let management = UserManagement {
            user_id: self.user,
            manager_id: self.manager,
            ..Default::default()
        };
        let management = create(db, management).await?;
        println!("User {} is now managed by {}.", management.user_id, management.manager_id);
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListManagements {
    #[clap(short, long)]
    pub user: i64,
}

impl ListManagements {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let managements: Vec<UserManagement> = find_user_management(db, self.user).await?;
        managements.print_formatted();
        Ok(())
    }
}
