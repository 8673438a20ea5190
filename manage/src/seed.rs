use async_trait::async_trait;
use colored::*;
use sea_orm::{DatabaseConnection, DbErr};
use std::io::{self, Write};
use std::ops::AddAssign;
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// Rows written, plus one warning per row skipped because a referenced name
/// was not found.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedOutcome {
    pub inserted: usize,
    pub warnings: Vec<String>,
}

impl SeedOutcome {
    pub fn inserted(inserted: usize) -> Self {
        Self {
            inserted,
            warnings: Vec::new(),
        }
    }

    /// Records a row skipped because `name` did not resolve to an `entity`.
    pub fn skip(&mut self, entity: &str, name: &str) {
        self.warnings
            .push(format!("Could not find {} with name \"{}\"!", entity, name));
    }

    pub fn skipped(&self) -> usize {
        self.warnings.len()
    }
}

impl AddAssign for SeedOutcome {
    fn add_assign(&mut self, other: Self) {
        self.inserted += other.inserted;
        self.warnings.extend(other.warnings);
    }
}

/// One seeding phase. Implementations commit their own transaction.
#[async_trait]
pub trait Seeder: Send + Sync {
    async fn seed(&self, db: &DatabaseConnection) -> Result<SeedOutcome, DbErr>;
}

/// Runs a seeder and reports it on stderr, see [`run_seeder_with`].
pub async fn run_seeder<S: Seeder + ?Sized>(
    seeder: &S,
    name: &str,
    db: &DatabaseConnection,
) -> Result<SeedOutcome, DbErr> {
    run_seeder_with(seeder, name, db, &mut io::stderr()).await
}

/// Runs a seeder and writes its lookup-miss warnings followed by
/// `Seeding <name>....... done (1.23ms)` to `out`.
///
/// Warnings are written whatever the log level is.
pub async fn run_seeder_with<S, W>(
    seeder: &S,
    name: &str,
    db: &DatabaseConnection,
    out: &mut W,
) -> Result<SeedOutcome, DbErr>
where
    S: Seeder + ?Sized,
    W: Write + Send,
{
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));

    let start = Instant::now();
    let result = seeder.seed(db).await;
    let elapsed = start.elapsed();

    // A broken stderr must not fail the seed.
    let _ = match &result {
        Ok(outcome) => {
            for warning in &outcome.warnings {
                let _ = writeln!(out, "{} {}", "warning:".yellow().bold(), warning);
            }

            let time_str = format!("({:.2?})", elapsed).dimmed();
            if outcome.skipped() > 0 {
                let skipped = format!("{} skipped", outcome.skipped()).yellow();
                writeln!(out, "{}{} {} {} {}", base_msg, dots, "done".green(), skipped, time_str)
            } else {
                writeln!(out, "{}{} {} {}", base_msg, dots, "done".green(), time_str)
            }
        }
        Err(_) => writeln!(out, "{}{} {}", base_msg, dots, "failed".red()),
    };
    out.flush().ok();

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSeeder(Result<SeedOutcome, String>);

    #[async_trait]
    impl Seeder for FixedSeeder {
        async fn seed(&self, _db: &DatabaseConnection) -> Result<SeedOutcome, DbErr> {
            self.0.clone().map_err(DbErr::Custom)
        }
    }

    #[test]
    fn test_outcomes_accumulate() {
        let mut total = SeedOutcome::inserted(4);
        let mut users = SeedOutcome::inserted(6);
        users.skip("Organization", "Altavista");
        total += users;

        assert_eq!(total.inserted, 10);
        assert_eq!(total.skipped(), 1);
        assert_eq!(
            total.warnings,
            vec![r#"Could not find Organization with name "Altavista"!"#.to_string()]
        );
    }

    #[tokio::test]
    async fn test_run_seeder_passes_outcome_through() {
        let db = DatabaseConnection::Disconnected;
        let outcome = SeedOutcome::inserted(2);

        let result = run_seeder(&FixedSeeder(Ok(outcome.clone())), "Fixed", &db).await;
        assert_eq!(result.unwrap(), outcome);
    }

    #[tokio::test]
    async fn test_run_seeder_writes_warnings() {
        let db = DatabaseConnection::Disconnected;
        let mut outcome = SeedOutcome::inserted(1);
        outcome.skip("User", "Larry Page");
        outcome.skip("LoggerRole", "Janitor");

        let mut out = Vec::new();
        run_seeder_with(&FixedSeeder(Ok(outcome)), "Logger", &db, &mut out)
            .await
            .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains(r#"Could not find User with name "Larry Page"!"#));
        assert!(printed.contains(r#"Could not find LoggerRole with name "Janitor"!"#));
        assert!(printed.contains("2 skipped"));
    }

    #[tokio::test]
    async fn test_run_seeder_propagates_errors() {
        let db = DatabaseConnection::Disconnected;

        let mut out = Vec::new();
        let result = run_seeder_with(&FixedSeeder(Err("boom".into())), "Fixed", &db, &mut out).await;
        assert!(matches!(result, Err(DbErr::Custom(msg)) if msg == "boom"));
        assert!(String::from_utf8(out).unwrap().contains("failed"));
    }
}
