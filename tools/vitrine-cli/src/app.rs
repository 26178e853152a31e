//! Interactive session state.

use std::time::{Duration, Instant};

use anyhow::Result;
use vitrine_commerce::catalog::{Carousel, StorefrontFilter};
use vitrine_store::{CartStore, CatalogStore, Notices, Slot};

use crate::context::Context;
use crate::output::Output;

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// The public storefront.
    Store,
    /// The admin login form.
    AdminLogin,
    /// The admin dashboard.
    AdminDashboard,
}

/// One interactive session: the stores plus the screen-local state.
///
/// The catalogue always boots from the seed records; only the cart
/// comes back from disk.
pub struct App {
    pub catalog: CatalogStore,
    pub cart: CartStore,
    pub notices: Notices,
    pub view: ViewState,
    pub filter: StorefrontFilter,
    pub carousel: Carousel,
    pub login_email: String,
    slide_interval: Duration,
}

impl App {
    /// Boot a session on the given screen.
    pub fn boot(ctx: &Context, view: ViewState) -> Result<Self> {
        ctx.output
            .debug(&format!("Using data dir: {}", ctx.data_dir().display()));
        let slot = Slot::open(ctx.data_dir())?;
        let catalog = CatalogStore::seeded();
        let cart = CartStore::open(slot);
        let slide_interval = ctx.slide_interval();
        let carousel = Carousel::new(catalog.visible_slides().len(), slide_interval, Instant::now());
        Ok(Self {
            catalog,
            cart,
            notices: Notices::new(ctx.notice_ttl()),
            view,
            filter: StorefrontFilter::new(),
            carousel,
            login_email: format!(
                "admin@{}.demo",
                ctx.store_name().to_lowercase().split_whitespace().collect::<String>()
            ),
            slide_interval,
        })
    }

    /// Leave the admin area and land on a fresh storefront: the filter
    /// clears and the slider restarts, as if the page had reloaded.
    pub fn return_to_store(&mut self, now: Instant) {
        self.view = ViewState::Store;
        self.filter = StorefrontFilter::new();
        self.carousel = Carousel::new(self.catalog.visible_slides().len(), self.slide_interval, now);
    }

    /// Drop expired notices and show the live ones.
    pub fn show_notices(&mut self, output: &Output, now: Instant) {
        self.notices.sweep(now);
        for notice in self.notices.entries() {
            output.notice(notice.kind, &notice.message);
        }
    }
}
