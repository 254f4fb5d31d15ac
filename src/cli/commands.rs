// CareCompanion — CLI Command Handlers
//
// Each function handles one CLI subcommand: validate the input the way the
// screens do, call the account store, print the outcome. Handlers write to
// any `Write` so they can run against an in-memory store in tests.

use std::io::Write;

use zeroize::Zeroizing;

use crate::config::Config;
use crate::error::CareCompanionError;
use crate::forms::{LoginForm, PasswordChecks, PasswordStrength, RegistrationForm};
use crate::store::{AccountStore, AccountSummary, Database, KvAccountStore};

use super::{Cli, Commands};

/// Execute the parsed CLI invocation against the on-disk store.
pub fn execute(cli: Cli) -> Result<(), CareCompanionError> {
    let Cli {
        data_dir,
        strict,
        command,
    } = cli;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        // Needs no storage
        Commands::Strength { password } => cmd_strength(password, &mut out),
        command => {
            let config = Config::resolve(data_dir, strict);
            let db = open_db(&config)?;
            let store = KvAccountStore::with_policy(&db, config.corruption_policy);
            run(command, &store, &mut out)
        }
    }
}

/// Dispatch one command against the given store.
pub fn run<S, W>(command: Commands, store: &S, out: &mut W) -> Result<(), CareCompanionError>
where
    S: AccountStore + ?Sized,
    W: Write,
{
    match command {
        Commands::Register {
            username,
            email,
            password,
            confirm_password,
            accept_terms,
        } => cmd_register(
            store,
            out,
            username,
            email,
            password,
            confirm_password,
            accept_terms,
        ),
        Commands::Login {
            identifier,
            password,
        } => cmd_login(store, out, identifier, password),
        Commands::Whoami => cmd_whoami(store, out),
        Commands::Logout => cmd_logout(store, out),
        Commands::Accounts => cmd_accounts(store, out),
        Commands::Strength { password } => cmd_strength(password, out),
    }
}

// ─── Register ────────────────────────────────────────────────────────────────

fn cmd_register<S, W>(
    store: &S,
    out: &mut W,
    username: String,
    email: String,
    password: String,
    confirm_password: Option<String>,
    accept_terms: bool,
) -> Result<(), CareCompanionError>
where
    S: AccountStore + ?Sized,
    W: Write,
{
    let confirm_password = confirm_password.unwrap_or_else(|| password.clone());
    let form = RegistrationForm {
        username,
        email,
        password,
        confirm_password,
        accept_terms,
    };

    let account = form.validate()?;
    let summary = AccountSummary::from(&account);
    store.register(account)?;

    writeln!(out, "✓ Account created")?;
    writeln!(out, "  Username: {}", summary.username)?;
    writeln!(out, "  Email:    {}", summary.email)?;
    writeln!(out)?;
    writeln!(
        out,
        "Next: log in with `carecompanion login {} --password <password>`",
        summary.username
    )?;

    Ok(())
}

// ─── Login ───────────────────────────────────────────────────────────────────

fn cmd_login<S, W>(
    store: &S,
    out: &mut W,
    identifier: String,
    password: String,
) -> Result<(), CareCompanionError>
where
    S: AccountStore + ?Sized,
    W: Write,
{
    let form = LoginForm {
        identifier,
        password,
    };
    let identifier = form.validate()?;
    let session = store.login(identifier, &form.password)?;

    writeln!(out, "✓ Login successful. Welcome, {}!", session.username)?;
    Ok(())
}

// ─── Session ─────────────────────────────────────────────────────────────────

fn cmd_whoami<S, W>(store: &S, out: &mut W) -> Result<(), CareCompanionError>
where
    S: AccountStore + ?Sized,
    W: Write,
{
    match store.current_session()? {
        Some(session) => {
            writeln!(out, "Logged in as {}", session)?;
        }
        None => {
            writeln!(out, "Not logged in.")?;
        }
    }
    Ok(())
}

fn cmd_logout<S, W>(store: &S, out: &mut W) -> Result<(), CareCompanionError>
where
    S: AccountStore + ?Sized,
    W: Write,
{
    store.logout()?;
    writeln!(out, "✓ Logged out")?;
    Ok(())
}

// ─── Accounts ────────────────────────────────────────────────────────────────

fn cmd_accounts<S, W>(store: &S, out: &mut W) -> Result<(), CareCompanionError>
where
    S: AccountStore + ?Sized,
    W: Write,
{
    let summaries: Vec<AccountSummary> = store
        .list_accounts()?
        .iter()
        .map(AccountSummary::from)
        .collect();

    if summaries.is_empty() {
        writeln!(out, "No accounts registered yet.")?;
        writeln!(
            out,
            "Create one with: carecompanion register --username <name> --email <email> --password <password> --accept-terms"
        )?;
        return Ok(());
    }

    writeln!(out, "Registered accounts ({}):\n", summaries.len())?;
    for summary in &summaries {
        writeln!(out, "  {:20} │ {}", summary.username, summary.email)?;
    }
    Ok(())
}

// ─── Strength ────────────────────────────────────────────────────────────────

fn cmd_strength<W: Write>(password: String, out: &mut W) -> Result<(), CareCompanionError> {
    let password = Zeroizing::new(password);
    let strength = PasswordStrength::evaluate(&password);
    let checks = PasswordChecks::evaluate(&password);

    let mark = |passed: bool| if passed { '+' } else { '-' };

    writeln!(out, "Strength: {}", strength)?;
    writeln!(out, "  {} 6+ characters", mark(checks.length))?;
    writeln!(out, "  {} Uppercase", mark(checks.uppercase))?;
    writeln!(out, "  {} Number", mark(checks.number))?;
    writeln!(out, "  {} Symbol", mark(checks.symbol))?;
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Open the slot database, creating the data directory on first use.
fn open_db(config: &Config) -> Result<Database, CareCompanionError> {
    std::fs::create_dir_all(config.data_dir())?;
    Ok(Database::open(&config.db_path())?)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormError;
    use crate::store::{MemoryKeyValueStore, StoreError};

    fn register_cmd(username: &str, email: &str, password: &str) -> Commands {
        Commands::Register {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: None,
            accept_terms: true,
        }
    }

    fn login_cmd(identifier: &str, password: &str) -> Commands {
        Commands::Login {
            identifier: identifier.to_string(),
            password: password.to_string(),
        }
    }

    fn run_to_string<S: AccountStore>(
        command: Commands,
        store: &S,
    ) -> Result<String, CareCompanionError> {
        let mut out = Vec::new();
        run(command, store, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_register_login_whoami_logout() {
        let kv = MemoryKeyValueStore::new();
        let store = KvAccountStore::new(&kv);

        let output = run_to_string(register_cmd("dave", "dave@x.com", "pw4pw4"), &store).unwrap();
        assert!(output.contains("Account created"));
        assert!(!output.contains("pw4pw4"));

        let output = run_to_string(login_cmd(" dave ", "pw4pw4"), &store).unwrap();
        assert!(output.contains("Welcome, dave!"));

        let output = run_to_string(Commands::Whoami, &store).unwrap();
        let session = store.current_session().unwrap().unwrap();
        assert_eq!(output, format!("Logged in as {}\n", session));
        assert!(output.starts_with("Logged in as dave <dave@x.com> since "));

        run_to_string(Commands::Logout, &store).unwrap();
        let output = run_to_string(Commands::Whoami, &store).unwrap();
        assert_eq!(output, "Not logged in.\n");
    }

    #[test]
    fn test_duplicate_email_surfaces_store_message() {
        let kv = MemoryKeyValueStore::new();
        let store = KvAccountStore::new(&kv);
        run_to_string(register_cmd("alice", "alice@x.com", "secret1"), &store).unwrap();

        let err = run_to_string(register_cmd("bob", "alice@x.com", "secret2"), &store)
            .unwrap_err();
        assert!(matches!(
            err,
            CareCompanionError::Store(StoreError::DuplicateEmail)
        ));
        assert_eq!(err.to_string(), "An account with this email already exists.");
    }

    #[test]
    fn test_invalid_form_never_reaches_store() {
        let kv = MemoryKeyValueStore::new();
        let store = KvAccountStore::new(&kv);

        let err = run_to_string(register_cmd("alice", "not-an-email", "secret1"), &store)
            .unwrap_err();
        assert!(matches!(err, CareCompanionError::Form(FormError::InvalidEmail)));
        assert!(store.list_accounts().unwrap().is_empty());
    }

    #[test]
    fn test_mismatched_confirmation_rejected() {
        let kv = MemoryKeyValueStore::new();
        let store = KvAccountStore::new(&kv);

        let command = Commands::Register {
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: Some("secret2".to_string()),
            accept_terms: true,
        };
        let err = run_to_string(command, &store).unwrap_err();
        assert!(matches!(err, CareCompanionError::Form(FormError::PasswordMismatch)));
    }

    #[test]
    fn test_login_failure_is_generic() {
        let kv = MemoryKeyValueStore::new();
        let store = KvAccountStore::new(&kv);
        run_to_string(register_cmd("carol", "carol@x.com", "pw3pw3"), &store).unwrap();

        let wrong_password = run_to_string(login_cmd("carol", "nope-nope"), &store).unwrap_err();
        let unknown_user = run_to_string(login_cmd("nobody", "pw3pw3"), &store).unwrap_err();
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[test]
    fn test_accounts_listing_hides_passwords() {
        let kv = MemoryKeyValueStore::new();
        let store = KvAccountStore::new(&kv);

        let output = run_to_string(Commands::Accounts, &store).unwrap();
        assert!(output.contains("No accounts registered yet."));

        run_to_string(register_cmd("alice", "alice@x.com", "secret1"), &store).unwrap();
        run_to_string(register_cmd("bob", "bob@x.com", "secret2"), &store).unwrap();

        let output = run_to_string(Commands::Accounts, &store).unwrap();
        assert!(output.contains("Registered accounts (2)"));
        assert!(output.contains("bob@x.com"));
        assert!(!output.contains("secret"));
    }

    #[test]
    fn test_strength_output() {
        let mut out = Vec::new();
        cmd_strength("Abcdefgh1!".to_string(), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.starts_with("Strength: 5/5 Very Strong"));
        assert!(output.contains("+ Symbol"));
    }

    #[test]
    fn test_execute_against_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("nested").join("data");

        let cli = Cli {
            data_dir: Some(data_dir.clone()),
            strict: false,
            command: register_cmd("kim", "kim@x.com", "pw9pw9"),
        };
        execute(cli).unwrap();

        let db = Database::open(&data_dir.join("carecompanion.db")).unwrap();
        let store = KvAccountStore::new(&db);
        assert_eq!(store.list_accounts().unwrap()[0].username, "kim");
    }
}
