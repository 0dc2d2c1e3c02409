use clap::{Parser, Subcommand, ValueEnum};
use salon_admin::actions::ActionOutcome;
use salon_admin::api::models::AppointmentStatus;
use salon_admin::appointments::calendar_entries;
use salon_admin::dashboard::Dashboard;
use salon_admin::error::other_error;
use salon_admin::notify::Notifier;
use salon_admin::utils::time::format_duration;
use salon_admin::{shutdown, startup};
use tracing::info;

/// Admin client for the salon booking platform
#[derive(Debug, Parser)]
#[command(name = "salon-admin", version, about)]
struct Cli {
    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show weekly opening hours and special availability
    Hours {
        /// Show one member's own slots instead of the salon's merged hours
        #[arg(long)]
        member: Option<String>,
    },
    /// List appointments, earliest first
    Appointments {
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        #[arg(long)]
        member: Option<String>,
    },
    /// Accept a pending appointment
    Accept { id: String },
    /// Cancel an appointment
    Cancel { id: String },
    /// List the salon's members
    Members,
    /// List categories and their services
    Services,
    /// Print the payment onboarding link
    Onboarding,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatusArg {
    Pending,
    Accepted,
    Cancelled,
}

impl From<StatusArg> for AppointmentStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Pending => AppointmentStatus::Pending,
            StatusArg::Accepted => AppointmentStatus::Accepted,
            StatusArg::Cancelled => AppointmentStatus::Cancelled,
        }
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    startup::init_logging()?;
    let cli = Cli::parse();

    info!("Starting salon-admin");

    let config = startup::load_config()?;
    let dashboard = startup::connect(&config, startup::confirmer(cli.yes)).await?;

    let result = tokio::select! {
        result = run(&dashboard, cli.command) => result,
        signal = shutdown::wait_for_signal() => signal.map_err(miette::Report::from),
    };

    shutdown::end_session(dashboard.api()).await;
    result
}

async fn run<N: Notifier>(dashboard: &Dashboard<N>, command: Command) -> miette::Result<()> {
    match command {
        Command::Hours { member } => {
            let schedule = dashboard
                .weekly_hours(member.as_deref())
                .await
                .ok_or_else(|| other_error("Could not load availability"))?;
            for (day, view) in schedule.rows(member.is_some())? {
                println!("{:<10} {}", day.label(), view);
            }
            for line in schedule.special_lines() {
                println!("{}", line);
            }
        }
        Command::Appointments { status, member } => {
            let appointments = dashboard
                .load_appointments(status.map(Into::into), member.as_deref())
                .await
                .ok_or_else(|| other_error("Could not load appointments"))?;
            for entry in calendar_entries(&appointments) {
                println!(
                    "[{:?}] {} - {} {}",
                    entry.status, entry, entry.client, entry.client_phone
                );
            }
        }
        Command::Accept { id } => {
            if !dashboard.accept_appointment(&id).await {
                return Err(other_error("Appointment was not accepted").into());
            }
        }
        Command::Cancel { id } => {
            if let ActionOutcome::Failed(message) = dashboard.cancel_appointment(&id).await {
                return Err(other_error(&message).into());
            }
        }
        Command::Members => {
            let members = dashboard
                .load_members()
                .await
                .ok_or_else(|| other_error("Could not load members"))?;
            for member in members {
                let services: Vec<&str> = member.services.iter().map(|s| s.name.as_str()).collect();
                println!("{:<24} {}", member.full_name(), services.join(", "));
            }
        }
        Command::Services => {
            let categories = dashboard
                .load_categories()
                .await
                .ok_or_else(|| other_error("Could not load services"))?;
            for category in categories {
                let state = if category.is_active { "" } else { " (inactive)" };
                println!("{}{}", category.name, state);
                for service in &category.services {
                    let state = if service.is_active { "" } else { " (inactive)" };
                    println!(
                        "  {:<28} {:>5} EUR {}{}",
                        service.name,
                        service.price,
                        format_duration(service.duration),
                        state
                    );
                }
            }
        }
        Command::Onboarding => {
            let link = dashboard
                .start_onboarding()
                .await
                .ok_or_else(|| other_error("Could not start onboarding"))?;
            println!("{}", link);
        }
    }
    Ok(())
}
