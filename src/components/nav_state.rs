//! State behind the navigation bar.
//!
//! Everything here is plain data so the bar's behaviour can be checked without
//! a renderer: [`NavView`] is derived from the shared session/cart state on
//! every render, [`NavUi`] holds the bar's own overlay toggles, and
//! [`NavUi::handle`] turns a click into the side effect the component performs.

use crate::backend::cart::CartItem;
use crate::backend::session::{Role, Session};
use crate::backend::AppCmd;
use crate::Route;

/// Shown in the avatar when there is no name to take an initial from.
pub const PLACEHOLDER_INITIAL: &str = "?";

/// Read-only facts the bar renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct NavView {
    pub full_name: Option<String>,
    pub role: Option<Role>,
    pub cart_count: usize,
    pub initial: String,
}

impl NavView {
    pub fn derive(session: Option<&Session>, cart_items: &[CartItem]) -> Self {
        let session = session.filter(|s| s.is_signed_in());
        Self {
            full_name: session.map(|s| s.full_name.clone()),
            role: session.map(|s| s.role),
            cart_count: cart_items.len(),
            initial: session
                .and_then(Session::initial)
                .unwrap_or_else(|| PLACEHOLDER_INITIAL.to_string()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.full_name.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    pub fn is_restaurant_owner(&self) -> bool {
        self.role == Some(Role::RestaurantOwner)
    }

    pub fn is_admin_or_owner(&self) -> bool {
        self.is_admin() || self.is_restaurant_owner()
    }

    /// Where the toolbar avatar and the drawer's Profile entry lead.
    pub fn profile_route(&self) -> Route {
        if self.is_admin_or_owner() {
            Route::RestaurantAdminComponent {}
        } else {
            Route::ProfileComponent {}
        }
    }

    /// Where the dropdown's Profile entry leads.
    ///
    /// Deliberately not the same mapping as [`NavView::profile_route`]; see DESIGN.md.
    pub fn menu_profile_route(&self) -> Route {
        if self.is_admin() {
            Route::AdminComponent {}
        } else {
            Route::SuperAdminComponent {}
        }
    }

    /// Only administrators get the dropdown; everyone else goes straight to their profile.
    pub fn avatar_opens_menu(&self) -> bool {
        self.is_admin()
    }

    pub fn avatar_tooltip(&self) -> &'static str {
        if self.is_admin() {
            "Admin Menu"
        } else {
            "Profile"
        }
    }
}

/// Which rendering the bar uses for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLayout {
    Toolbar,
    Drawer,
}

impl NavLayout {
    pub fn for_width(width: u32, medium_breakpoint: u32) -> Self {
        if width < medium_breakpoint {
            NavLayout::Drawer
        } else {
            NavLayout::Toolbar
        }
    }
}

/// Where an open dropdown hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAnchor {
    Avatar,
}

/// The bar's own overlay state. Lives as long as the bar is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavUi {
    pub menu_anchor: Option<MenuAnchor>,
    pub drawer_open: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavIntent {
    /// A plain link: brand, search, cart, login, home.
    Go(Route),
    /// The avatar in the toolbar.
    AvatarClick,
    /// Profile entry in the toolbar or drawer.
    Profile,
    /// Profile entry inside the dropdown.
    MenuProfile,
    Logout,
    /// Click outside an open dropdown.
    DismissMenu,
    SetDrawer(bool),
    CloseAuthModal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavEffect {
    None,
    Push(Route),
    Dispatch(AppCmd),
}

impl NavUi {
    pub fn is_menu_open(&self) -> bool {
        self.menu_anchor.is_some()
    }

    fn close_overlays(&mut self) {
        self.menu_anchor = None;
        self.drawer_open = false;
    }

    pub fn handle(&mut self, intent: NavIntent, view: &NavView) -> NavEffect {
        match intent {
            NavIntent::Go(route) => {
                self.close_overlays();
                NavEffect::Push(route)
            }
            NavIntent::AvatarClick if view.avatar_opens_menu() => {
                self.menu_anchor = Some(MenuAnchor::Avatar);
                NavEffect::None
            }
            NavIntent::AvatarClick | NavIntent::Profile => {
                self.close_overlays();
                NavEffect::Push(view.profile_route())
            }
            NavIntent::MenuProfile => {
                self.close_overlays();
                NavEffect::Push(view.menu_profile_route())
            }
            NavIntent::Logout => {
                self.close_overlays();
                NavEffect::Dispatch(AppCmd::Logout)
            }
            NavIntent::DismissMenu => {
                self.menu_anchor = None;
                NavEffect::None
            }
            NavIntent::SetDrawer(open) => {
                if open {
                    self.menu_anchor = None;
                }
                self.drawer_open = open;
                NavEffect::None
            }
            NavIntent::CloseAuthModal => NavEffect::Push(Route::HomeComponent {}),
        }
    }
}
