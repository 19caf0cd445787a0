use std::sync::Arc;

use clap::{Parser, Subcommand};
use propdesk::config::{ClientConfig, ConfigError, Session};
use propdesk::net::api::PropertyApi;
use propdesk::net::error::ApiError;
use propdesk::net::http::HttpApi;
use propdesk::net::types::Id;
use propdesk::pages::LoadOutcome;
use propdesk::pages::dashboard::{DashboardPage, DeclineOutcome, SaveOutcome};
use propdesk::pages::tenant::{SearchOutcome, TenantPage};
use propdesk::state::notice::Notices;
use propdesk::state::tenant::{TenantEvent, TicketTab};
use propdesk::util::validation::{EditForm, ValidationError};
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("api error: {0}")]
    Api(#[from] ApiError),
    #[error("invalid edit: {0}")]
    Validation(#[from] ValidationError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid assignment `{0}`; expected TENANT=STAFF")]
    InvalidAssignment(String),
    #[error("load failed: {0:?}")]
    LoadFailed(Vec<&'static str>),
    #[error("user `{0}` has no pending access request")]
    NotPending(String),
    #[error("staff search failed")]
    SearchFailed,
    #[error("{failed} of {attempted} staff assignments failed; nothing was reconciled")]
    SaveFailed { attempted: usize, failed: usize },
}

#[derive(Parser, Debug)]
#[command(name = "propdesk", about = "Property-management admin client")]
struct Cli {
    /// Overrides `PROPDESK_BASE_URL`.
    #[arg(long)]
    base_url: Option<String>,

    #[arg(long, env = "PROPDESK_ACCESS_TOKEN")]
    access_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show unstaffed tenants, staff candidates, widgets, and pending requests.
    Dashboard,
    /// Assign staff to unstaffed tenants in one batch.
    Assign {
        /// `TENANT=STAFF` pairs.
        #[arg(required = true, value_parser = parse_assignment)]
        assignments: Vec<(String, String)>,
    },
    /// Decline a pending access request.
    Decline {
        user_id: String,
        /// Confirm the denial; without it the request is left alone.
        #[arg(long)]
        yes: bool,
    },
    /// Show where approving a pending access request navigates.
    Approve { user_id: String },
    /// Show a tenant record.
    Tenant {
        tenant_id: String,
        /// List closed tickets instead of ongoing ones.
        #[arg(long)]
        closed: bool,
    },
    /// Search staff by name.
    SearchStaff { text: String },
    /// Validate and apply a contact edit to a tenant record locally.
    EditTenant {
        tenant_id: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: Option<String>,
    },
}

fn parse_assignment(raw: &str) -> Result<(String, String), CliError> {
    match raw.split_once('=') {
        Some((tenant, staff)) if !tenant.is_empty() && !staff.is_empty() => Ok((tenant.to_owned(), staff.to_owned())),
        _ => Err(CliError::InvalidAssignment(raw.to_owned())),
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url.trim_end_matches('/').to_owned();
    }
    let session = cli.access_token.map_or_else(Session::anonymous, Session::bearer);
    let api: Arc<dyn PropertyApi> = Arc::new(HttpApi::new(&config)?);

    match cli.command {
        Command::Dashboard => run_dashboard(api, session).await,
        Command::Assign { assignments } => run_assign(api, session, assignments).await,
        Command::Decline { user_id, yes } => run_decline(api, session, user_id, yes).await,
        Command::Approve { user_id } => run_approve(api, session, user_id).await,
        Command::Tenant { tenant_id, closed } => run_tenant(api, session, &config, tenant_id, closed).await,
        Command::SearchStaff { text } => run_search_staff(api, session, &config, text).await,
        Command::EditTenant { tenant_id, first_name, last_name, phone, email } => {
            let form = EditForm { first_name, last_name, phone, email };
            run_edit_tenant(api, session, &config, tenant_id, form).await
        }
    }
}

async fn loaded_dashboard(api: Arc<dyn PropertyApi>, session: Session) -> Result<DashboardPage, CliError> {
    let mut page = DashboardPage::new(api, session);
    if let LoadOutcome::Failed { failures } = page.load().await {
        print_notices(&mut page.state.notices);
        return Err(CliError::LoadFailed(failures));
    }
    Ok(page)
}

async fn run_dashboard(api: Arc<dyn PropertyApi>, session: Session) -> Result<(), CliError> {
    let mut page = loaded_dashboard(api, session).await?;
    let state = &mut page.state;
    print_json(&json!({
        "unstaffed": state.unstaffed,
        "staffCandidates": state.staff_candidates,
        "pending": state.pending,
        "widgets": state.widgets,
    }))?;
    print_notices(&mut state.notices);
    Ok(())
}

async fn run_assign(
    api: Arc<dyn PropertyApi>,
    session: Session,
    assignments: Vec<(String, String)>,
) -> Result<(), CliError> {
    let mut page = loaded_dashboard(api, session).await?;
    for (tenant, staff) in assignments {
        page.change_assignment(Id::from(tenant), Id::from(staff));
    }

    let outcome = page.save_assignments().await;
    print_notices(&mut page.state.notices);
    match outcome {
        SaveOutcome::NothingToSave => {
            eprintln!("no listed tenant matched; nothing to save");
            Ok(())
        }
        SaveOutcome::Saved { staffed, remaining } => {
            print_json(&json!({ "staffed": staffed, "remaining": page.state.unstaffed }))?;
            eprintln!("{remaining} tenants still unstaffed");
            Ok(())
        }
        SaveOutcome::Failed { attempted, failed } => Err(CliError::SaveFailed { attempted, failed }),
    }
}

async fn run_decline(api: Arc<dyn PropertyApi>, session: Session, user_id: String, yes: bool) -> Result<(), CliError> {
    let mut page = loaded_dashboard(api, session).await?;
    if !page.decline(Id::from(user_id.clone())) {
        return Err(CliError::NotPending(user_id));
    }
    let outcome = page.confirm_decline(yes).await;
    print_notices(&mut page.state.notices);
    let rendered = match outcome {
        DeclineOutcome::Cancelled => json!({ "declined": false }),
        DeclineOutcome::Declined(id) => json!({ "declined": true, "id": id }),
        DeclineOutcome::Kept(id) | DeclineOutcome::Failed(id) => json!({ "declined": false, "id": id }),
    };
    print_json(&rendered)
}

async fn run_approve(api: Arc<dyn PropertyApi>, session: Session, user_id: String) -> Result<(), CliError> {
    let page = loaded_dashboard(api, session).await?;
    let route = page.state.approve_target(&Id::from(user_id));
    print_json(&json!({ "path": route.path, "user": route.user }))
}

async fn loaded_tenant(
    api: Arc<dyn PropertyApi>,
    session: Session,
    config: &ClientConfig,
    tenant_id: String,
) -> Result<TenantPage, CliError> {
    let mut page = TenantPage::new(api, session, Id::from(tenant_id), config.submit_delay);
    if let LoadOutcome::Failed { failures } = page.load().await {
        print_notices(&mut page.state.notices);
        return Err(CliError::LoadFailed(failures));
    }
    Ok(page)
}

async fn run_tenant(
    api: Arc<dyn PropertyApi>,
    session: Session,
    config: &ClientConfig,
    tenant_id: String,
    closed: bool,
) -> Result<(), CliError> {
    let mut page = loaded_tenant(api, session, config, tenant_id).await?;
    if closed {
        page.state.apply(TenantEvent::TabSelected(TicketTab::Closed));
    }

    let state = &mut page.state;
    print_json(&json!({
        "contact": state.contact_rows(),
        "tab": state.active_tab.label(),
        "tickets": state.tickets_for_tab(),
        "staff": state.selections,
    }))?;
    print_notices(&mut state.notices);
    Ok(())
}

async fn run_search_staff(
    api: Arc<dyn PropertyApi>,
    session: Session,
    config: &ClientConfig,
    text: String,
) -> Result<(), CliError> {
    let mut page = TenantPage::new(api, session, Id::default(), config.submit_delay);
    let outcome = page.search(text).await;
    print_notices(&mut page.state.notices);
    match outcome {
        SearchOutcome::Failed => Err(CliError::SearchFailed),
        SearchOutcome::Cleared | SearchOutcome::Resolved(_) => print_json(&json!(page.state.search_results)),
    }
}

async fn run_edit_tenant(
    api: Arc<dyn PropertyApi>,
    session: Session,
    config: &ClientConfig,
    tenant_id: String,
    form: EditForm,
) -> Result<(), CliError> {
    let mut page = loaded_tenant(api, session, config, tenant_id).await?;
    page.state.apply(TenantEvent::EditToggled);
    page.submit_edit(form).await?;
    print_json(&json!({ "contact": page.state.contact_rows() }))?;
    eprintln!("edit applied locally; no changes were sent to the server");
    Ok(())
}

fn print_notices(notices: &mut Notices) {
    for notice in notices.drain() {
        eprintln!("[{:?}] {}: {}", notice.level, notice.code, notice.message);
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
