use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use inquire::Confirm;

use nomad_data::{Patch, Request, STATUS_PENDING};
use nomad_db::Connection;
use nomad_queries::{create, fields, find_request_by_user, get_request_data, update_request_status};

use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Requests {
    /// File a request for a trip
    #[clap(name = "add")]
    Add(AddRequest),
    /// List the requests of a trip
    #[clap(name = "list")]
    List(ListRequests),
    /// Show a pending request
    #[clap(name = "pending")]
    Pending(ShowPendingRequest),
    /// Approve or reject a pending request
    #[clap(name = "set-status")]
    SetStatus(SetRequestStatus),
}

impl Requests {
    pub async fn run(self, db: &Connection) -> Result<()> {
        match self {
            Requests::Add(cmd) => cmd.run(db).await,
            Requests::List(cmd) => cmd.run(db).await,
            Requests::Pending(cmd) => cmd.run(db).await,
            Requests::SetStatus(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct AddRequest {
    #[clap(short, long)]
    pub trip: i64,
    #[clap(short, long)]
    pub user: i64,
    #[clap(short, long)]
    pub manager: i64,
}

impl AddRequest {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let request = Request {
            trip_id: self.trip,
            user_id: self.user,
            manager_id: self.manager,
            status: STATUS_PENDING.to_string(),
            ..Default::default()
        };
        let request = create(db, request).await?;
        println!("Request added with id {}.", request.id);
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListRequests {
    #[clap(short, long)]
    pub trip: i64,
}

impl ListRequests {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let requests: Vec<Request> = find_request_by_user(db, self.trip).await?;
        println!("{} requests.", requests.len());
        requests.print_formatted();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ShowPendingRequest {
    #[clap(short, long)]
    pub id: i64,
}

impl ShowPendingRequest {
    pub async fn run(self, db: &Connection) -> Result<()> {
        let request: Request = get_request_data(db, self.id)
            .await?
            .ok_or_else(|| anyhow!("No pending request with id {}.", self.id))?;
        println!();
        request.print_formatted();
        println!();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct SetRequestStatus {
    #[clap(short, long)]
    pub id: i64,
    #[clap(short, long)]
    pub status: String,
    /// Do not ask for confirmation
    #[clap(short, long)]
    pub yes: bool,
}

impl SetRequestStatus {
    /// Run the command and update the status of a pending request
    pub async fn run(self, db: &Connection) -> Result<()> {
        let request: Request = get_request_data(db, self.id)
            .await?
            .ok_or_else(|| anyhow!("No pending request with id {}.", self.id))?;

        let update = Request {
            status: self.status.clone(),
            ..request.clone()
        };
        println!();
        (request, update).print_formatted();
        println!();

        if !self.yes {
            let confirm = Confirm::new("Update request?").with_default(true);
            if !confirm.prompt()? {
                return Ok(());
            }
        }

        let patch = Patch::new().set(fields::STATUS, self.status);
        let updated: Vec<Request> = update_request_status(db, &patch, self.id).await?;
        for request in updated {
            tracing::info!(request_id = request.id, status = %request.status, "request status updated");
            println!("Request {} is now {}.", request.id, request.status);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use nomad_data::STATUS_APPROVED;

    #[tokio::test]
    async fn test_set_request_status() {
        let (_handle, db) = Connection::open_test().await;
        let request = create(
            &db,
            Request {
                trip_id: 1,
                user_id: 2,
                manager_id: 3,
                status: STATUS_PENDING.to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let cmd = SetRequestStatus {
            id: request.id,
            status: STATUS_APPROVED.to_string(),
            yes: true,
        };
        cmd.run(&db).await.unwrap();

        let requests: Vec<Request> = find_request_by_user(&db, 1).await.unwrap();
        assert_eq!(requests[0].status, STATUS_APPROVED);

        // Only pending requests can be updated
        let cmd = SetRequestStatus {
            id: request.id,
            status: STATUS_PENDING.to_string(),
            yes: true,
        };
        let err = cmd.run(&db).await.unwrap_err();
        assert_eq!(err.to_string(), format!("No pending request with id {}.", request.id));
    }
}
