use serde_json::Value;

use crate::gas::args::CallArgs;
use crate::gas::calls::{CallRegistry, CallTarget};
use crate::gas::config::{parse_accounts, parse_calls, parse_domains, AccountsSpec, DomainsSpec, TagConfig};
use crate::gas::constants::{
    DEFAULT_SCRIPT_URL, DEFAULT_TRACKERS, MULTI_DOMAIN, MULTI_DOMAIN_TRIGGER, NAMESPACE_SEPARATOR,
    SET_ACCOUNT, SET_ALLOW_LINKER, SET_DOMAIN_NAME,
};
use crate::gas::error::{invalid_argument, GasResult};
use crate::gas::snippet::{render_tag, PushStatement};

/// Accumulates gas.js configuration and renders the bootstrap snippet.
///
/// The builder is a plain owned value: mutate it through `&mut self` and call
/// [`render`](Self::render) as often as needed. Rendering never changes state.
#[derive(Clone, Debug, PartialEq)]
pub struct GasTag {
    script_url: String,
    accounts: Vec<Account>,
    domains: Vec<String>,
    calls: CallRegistry,
}

/// A Google Analytics account id, optionally bound to a named tracker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    namespace: Option<String>,
    id: String,
}

impl Account {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            namespace: None,
            id: id.into(),
        }
    }

    pub fn namespaced(namespace: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            id: id.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn method_name(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}{NAMESPACE_SEPARATOR}{SET_ACCOUNT}"),
            None => SET_ACCOUNT.to_string(),
        }
    }

    fn validate(&self) -> GasResult<()> {
        if self.id.trim().is_empty() {
            return Err(invalid_argument("Account id must not be empty"));
        }
        if let Some(namespace) = &self.namespace {
            if namespace.trim().is_empty() || namespace.contains(NAMESPACE_SEPARATOR) {
                return Err(invalid_argument(format!(
                    "Invalid tracker namespace `{namespace}` for account `{}`",
                    self.id
                )));
            }
        }
        Ok(())
    }
}

impl From<&str> for Account {
    fn from(id: &str) -> Self {
        Account::new(id)
    }
}

impl From<String> for Account {
    fn from(id: String) -> Self {
        Account::new(id)
    }
}

impl<N: Into<String>, I: Into<String>> From<(N, I)> for Account {
    fn from((namespace, id): (N, I)) -> Self {
        Account::namespaced(namespace, id)
    }
}

/// One method registration in a batch: a bare name or a name with arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodSpec {
    pub(crate) name: String,
    pub(crate) args: Option<CallArgs>,
}

impl MethodSpec {
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: None,
        }
    }

    pub fn with_args(name: impl Into<String>, args: impl Into<CallArgs>) -> Self {
        Self {
            name: name.into(),
            args: Some(args.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> Option<&CallArgs> {
        self.args.as_ref()
    }
}

impl From<&str> for MethodSpec {
    fn from(name: &str) -> Self {
        MethodSpec::bare(name)
    }
}

impl From<String> for MethodSpec {
    fn from(name: String) -> Self {
        MethodSpec::bare(name)
    }
}

impl<N: Into<String>> From<(N, CallArgs)> for MethodSpec {
    fn from((name, args): (N, CallArgs)) -> Self {
        MethodSpec::with_args(name, args)
    }
}

/// Read view over accounts or domains: the lone entry when exactly one is set, otherwise the
/// full list. Accessors return `None` when nothing has been set.
#[derive(Debug, PartialEq, Eq)]
pub enum OneOrMany<'a, T> {
    One(&'a T),
    Many(&'a [T]),
}

impl<T> Clone for OneOrMany<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OneOrMany<'_, T> {}

impl<'a, T> OneOrMany<'a, T> {
    fn from_slice(items: &'a [T]) -> Option<Self> {
        match items {
            [] => None,
            [one] => Some(OneOrMany::One(one)),
            many => Some(OneOrMany::Many(many)),
        }
    }

    pub fn as_slice(&self) -> &'a [T] {
        match *self {
            OneOrMany::One(one) => std::slice::from_ref(one),
            OneOrMany::Many(many) => many,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl Default for GasTag {
    fn default() -> Self {
        Self::new()
    }
}

impl GasTag {
    pub fn new() -> Self {
        Self {
            script_url: DEFAULT_SCRIPT_URL.to_string(),
            accounts: Vec::new(),
            domains: Vec::new(),
            calls: CallRegistry::default(),
        }
    }

    /// Creates a builder with the given calls already registered.
    pub fn with_calls<I, S>(batch: I) -> GasResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<MethodSpec>,
    {
        let mut tag = Self::new();
        tag.push_calls(batch)?;
        Ok(tag)
    }

    /// Builds a builder from a declarative configuration. Sections are applied in the order
    /// script URL, accounts, domains, calls.
    pub fn from_config(config: &TagConfig) -> GasResult<Self> {
        let accounts = config.accounts.as_ref().map(parse_accounts).transpose()?;
        let domains = config.domains.as_ref().map(parse_domains).transpose()?;
        let calls = config.calls.as_ref().map(parse_calls).transpose()?;

        let mut tag = Self::new();
        if let Some(url) = &config.script_url {
            tag.set_script_url(url.clone());
        }
        match accounts {
            Some(AccountsSpec::One(account)) => {
                tag.push_account(account)?;
            }
            Some(AccountsSpec::Batch(batch)) => {
                tag.add_accounts(batch)?;
            }
            None => {}
        }
        match domains {
            Some(DomainsSpec::One(domain)) => {
                tag.add_domain(&domain)?;
            }
            Some(DomainsSpec::Batch(batch)) => {
                tag.add_domains(batch)?;
            }
            None => {}
        }
        if let Some(calls) = calls {
            tag.push_calls(calls)?;
        }
        Ok(tag)
    }

    /// Renders the opinionated default setup for one account on one domain: page views, forms,
    /// outbound links, max scroll, downloads, YouTube and Vimeo (forced), and mailto links.
    ///
    /// Each call starts from fresh state; nothing is shared between invocations.
    pub fn defaults(account: &str, domain: &str) -> GasResult<String> {
        let mut tag = Self {
            calls: CallRegistry::with_multi_slots(),
            ..Self::new()
        };
        tag.add_account(account, None)?;
        tag.add_domain(domain)?;
        for (method, forced) in DEFAULT_TRACKERS {
            if forced {
                tag.push_with(method, CallArgs::options([("force", true)]))?;
            } else {
                tag.push(method)?;
            }
        }
        Ok(tag.render())
    }

    pub fn script_url(&self) -> &str {
        &self.script_url
    }

    /// Replaces the gas.js location. The value is emitted verbatim.
    pub fn set_script_url(&mut self, url: impl Into<String>) {
        self.script_url = url.into();
    }

    /// Registers a call without arguments.
    pub fn push(&mut self, method: &str) -> GasResult<()> {
        let target = CallTarget::resolve(method)?;
        self.calls.register(target, None);
        Ok(())
    }

    /// Registers a call with arguments. Multi-call methods (`_setAccount`, `_setDomainName`,
    /// optionally prefixed with `namespace.`) accumulate; every other method keeps only its
    /// latest arguments.
    pub fn push_with(&mut self, method: &str, args: impl Into<CallArgs>) -> GasResult<()> {
        let target = CallTarget::resolve(method)?;
        self.calls.register(target, Some(args.into()));
        Ok(())
    }

    /// Registers a batch of calls in order. Nothing is registered if any name is invalid.
    pub fn push_calls<I, S>(&mut self, batch: I) -> GasResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<MethodSpec>,
    {
        let resolved = batch
            .into_iter()
            .map(|spec| {
                let spec: MethodSpec = spec.into();
                CallTarget::resolve(&spec.name).map(|target| (target, spec.args))
            })
            .collect::<GasResult<Vec<_>>>()?;
        if resolved.is_empty() {
            log::warn!("ignoring empty call batch");
        }
        for (target, args) in resolved {
            self.calls.register(target, args);
        }
        Ok(())
    }

    /// Registers calls described as JSON. See [`TagConfig`] for the accepted shapes.
    pub fn push_json(&mut self, batch: &Value) -> GasResult<()> {
        let specs = parse_calls(batch)?;
        self.push_calls(specs)
    }

    /// Adds one account, bound to the tracker `name` when given, and registers its
    /// `_setAccount` call.
    pub fn add_account(
        &mut self,
        id: &str,
        name: Option<&str>,
    ) -> GasResult<Option<OneOrMany<'_, Account>>> {
        let account = match name {
            Some(name) => Account::namespaced(name, id),
            None => Account::new(id),
        };
        self.push_account(account)?;
        Ok(self.accounts())
    }

    /// Adds several accounts in order, each with its own `_setAccount` call.
    pub fn add_accounts<I, A>(&mut self, batch: I) -> GasResult<Option<OneOrMany<'_, Account>>>
    where
        I: IntoIterator<Item = A>,
        A: Into<Account>,
    {
        let batch: Vec<Account> = batch.into_iter().map(Into::into).collect();
        batch.iter().try_for_each(Account::validate)?;
        if batch.is_empty() {
            log::warn!("ignoring empty account batch");
        }
        for account in batch {
            self.register_account(account)?;
        }
        Ok(self.accounts())
    }

    pub fn accounts(&self) -> Option<OneOrMany<'_, Account>> {
        OneOrMany::from_slice(&self.accounts)
    }

    /// Adds one tracked domain and registers its `_setDomainName` call.
    pub fn add_domain(&mut self, domain: &str) -> GasResult<Option<OneOrMany<'_, String>>> {
        validate_domain(domain)?;
        self.register_domain(domain.to_string())?;
        Ok(self.domains())
    }

    /// Sets up cross-domain tracking: `_setAllowLinker`, one `_setDomainName` per domain, then
    /// `_gasMultiDomain` on click.
    pub fn add_domains<I, S>(&mut self, batch: I) -> GasResult<Option<OneOrMany<'_, String>>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let batch: Vec<String> = batch.into_iter().map(Into::into).collect();
        batch.iter().map(String::as_str).try_for_each(validate_domain)?;
        if batch.is_empty() {
            log::warn!("ignoring empty domain batch");
            return Ok(self.domains());
        }

        log::debug!("enabling cross-domain tracking for {} domains", batch.len());
        self.push_with(SET_ALLOW_LINKER, true)?;
        for domain in batch {
            self.register_domain(domain)?;
        }
        self.push_with(MULTI_DOMAIN, MULTI_DOMAIN_TRIGGER)?;
        Ok(self.domains())
    }

    pub fn domains(&self) -> Option<OneOrMany<'_, String>> {
        OneOrMany::from_slice(&self.domains)
    }

    /// The statements `render` would emit, without the loader wrapper.
    pub fn statements(&self) -> Vec<PushStatement> {
        self.calls.statements()
    }

    /// Renders the full `<script>` snippet for the current state.
    pub fn render(&self) -> String {
        render_tag(&self.script_url, &self.calls.statements())
    }

    fn push_account(&mut self, account: Account) -> GasResult<()> {
        account.validate()?;
        self.register_account(account)
    }

    fn register_account(&mut self, account: Account) -> GasResult<()> {
        self.push_with(&account.method_name(), account.id.as_str())?;
        self.accounts.push(account);
        Ok(())
    }

    fn register_domain(&mut self, domain: String) -> GasResult<()> {
        self.push_with(SET_DOMAIN_NAME, domain.as_str())?;
        self.domains.push(domain);
        Ok(())
    }
}

fn validate_domain(domain: &str) -> GasResult<()> {
    if domain.trim().is_empty() {
        return Err(invalid_argument("Domain must not be empty"));
    }
    Ok(())
}
