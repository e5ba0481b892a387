use crate::{error::LbRenewAcmeError, log::*};
use acme2_eab::{Account, AccountBuilder, Directory, DirectoryBuilder};
use lbrenew_keys::KeyPair;
use std::sync::Arc;
use url::Url;

/// Opaque handle to a registered ACME account, bound to its session
pub type AccountHandle = Arc<Account>;

/* ------------------------------------------------ */
/// Session scoped to an ACME directory endpoint and an account key pair.
/// Connecting fetches the directory, so it must not happen before the
/// renewal target has been located.
pub struct AcmeSession {
  directory: Arc<Directory>,
  account_key: KeyPair,
}

impl AcmeSession {
  /// Fetch the ACME directory and establish a session for the account key
  pub async fn connect(directory_url: &Url, account_key: &KeyPair) -> Result<Self, LbRenewAcmeError> {
    debug!("Fetch ACME directory from {directory_url}");
    let directory = DirectoryBuilder::new(directory_url.to_string()).build().await?;
    Ok(Self {
      directory,
      account_key: account_key.clone(),
    })
  }

  /// Terms-of-service url advertised by the directory, if any
  pub fn terms_of_service(&self) -> Option<String> {
    self.directory.meta.as_ref().and_then(|m| m.terms_of_service.clone())
  }
}

/* ------------------------------------------------ */
#[derive(Debug, Clone, PartialEq, Eq)]
/// How the account was resolved. Callers branch on this data rather than on
/// an exception type; both variants carry an equivalent account handle.
pub enum RegistrationOutcome {
  /// A brand-new registration was created, with the terms-of-service
  /// agreement committed as part of the resolution
  Created { terms_of_service: Option<String> },
  /// The account key was already registered and the existing registration
  /// was bound to the session
  AlreadyExists,
}

/* ------------------------------------------------ */
/// Register the account key with the ACME service, or bind to the existing
/// registration for that key. Registration is idempotent: resolving the same
/// key twice yields equivalent handles.
pub async fn resolve_account(
  session: &AcmeSession,
) -> Result<(AccountHandle, RegistrationOutcome), LbRenewAcmeError> {
  // Probe for an existing registration first. ACME v2 has no conflict
  // signal for newAccount, so existence is asked for explicitly.
  let mut probe = AccountBuilder::new(session.directory.clone());
  probe.private_key(session.account_key.pkey().clone());
  probe.only_return_existing(true);
  match probe.build().await {
    Ok(account) => {
      debug!("Account key already registered, bound to existing registration");
      return Ok((account, RegistrationOutcome::AlreadyExists));
    }
    Err(e) => {
      // A transport failure here resurfaces on the create attempt below.
      debug!("No existing registration returned ({e}), creating a new one");
    }
  }

  let terms_of_service = session.terms_of_service();
  let mut builder = AccountBuilder::new(session.directory.clone());
  builder.private_key(session.account_key.pkey().clone());
  builder.terms_of_service_agreed(true);
  let account = builder.build().await?;
  debug!("New account registered, status: {:?}", account.status);

  Ok((account, RegistrationOutcome::Created { terms_of_service }))
}
