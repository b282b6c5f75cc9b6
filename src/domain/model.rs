use std::sync::Arc;

/// A client that can send packages through any company that registered it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Client {
    name: String,
}

impl Client {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A shipment bound to a client.
///
/// The package only changes state once, when a company accepts it for transport:
/// `is_transported` flips to `true` and the ship date is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    origin: String,
    destination: String,
    client: Arc<Client>,
    is_transported: bool,
    ship_date: Option<String>,
}

impl Package {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        client: impl Into<Arc<Client>>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            client: client.into(),
            is_transported: false,
            ship_date: None,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn is_transported(&self) -> bool {
        self.is_transported
    }

    /// `None` until the package has been accepted for transport.
    pub fn ship_date(&self) -> Option<&str> {
        self.ship_date.as_deref()
    }

    /// Exact, case-sensitive comparison.
    pub fn has_distinct_endpoints(&self) -> bool {
        self.origin != self.destination
    }

    pub(crate) fn mark_transported(&mut self, ship_date: &str) {
        self.is_transported = true;
        self.ship_date = Some(ship_date.to_string());
    }
}
