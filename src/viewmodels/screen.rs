// ============================================================================
// SCREEN VIEWMODEL - Which branch to show and what it contains
// ============================================================================
// Pure functions over a plain snapshot of AppState. The views only turn a
// ScreenModel into DOM nodes, every decision is made here.
// ============================================================================

use crate::config::{FOOTER_LOGO, IMAGE_INTRO, IMAGE_MINTED, IMAGE_NOT_WEEKEND, IMAGE_WEEKEND};

pub const LOADING_TEXT: &str = "Loading...";
pub const MINT_LABEL: &str = "Mint";
pub const MINTING_LABEL: &str = "Minting...";
pub const SHARE_LABEL: &str = "Share";
pub const CONNECT_LABEL: &str = "Connect";
pub const DISCONNECT_LABEL: &str = "Disconnect";

/// Everything the screen depends on, copied out of AppState
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppSnapshot {
    pub sdk_loaded: bool,
    pub address: Option<String>,
    pub is_connected: bool,
    pub is_weekend: bool,
    pub minted: bool,
    pub mint_pending: bool,
    pub mint_confirming: bool,
}

/// The five mutually exclusive screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewBranch {
    Loading,
    Disconnected,
    WeekendUnminted,
    WeekendMinted,
    NotWeekend,
}

/// Branch selection, first matching rule wins
pub fn derive_branch(sdk_loaded: bool, address: Option<&str>, is_weekend: bool, minted: bool) -> ViewBranch {
    if !sdk_loaded {
        return ViewBranch::Loading;
    }
    if address.is_none() {
        return ViewBranch::Disconnected;
    }
    match (is_weekend, minted) {
        (true, false) => ViewBranch::WeekendUnminted,
        (true, true) => ViewBranch::WeekendMinted,
        (false, _) => ViewBranch::NotWeekend,
    }
}

/// User intents a button can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Mint,
    Share,
    Connect,
    Disconnect,
    OpenFooter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonModel {
    pub label: &'static str,
    pub action: Action,
    pub disabled: bool,
    pub spinner: bool,
}

impl ButtonModel {
    fn plain(label: &'static str, action: Action) -> Self {
        Self {
            label,
            action,
            disabled: false,
            spinner: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Placeholder(&'static str),
    Heading(&'static str),
    Paragraph(&'static str),
    Image { src: &'static str, alt: &'static str },
    Button(ButtonModel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterModel {
    pub logo: &'static str,
    pub alt: &'static str,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenModel {
    pub branch: ViewBranch,
    pub blocks: Vec<Block>,
    /// Connect/Disconnect, under every branch except Loading
    pub wallet_button: Option<ButtonModel>,
    pub footer: Option<FooterModel>,
}

/// Mint button: spinner label while the wallet or the receipt is pending
pub fn mint_button(pending: bool, confirming: bool) -> ButtonModel {
    let busy = pending || confirming;
    ButtonModel {
        label: if busy { MINTING_LABEL } else { MINT_LABEL },
        action: Action::Mint,
        disabled: busy,
        spinner: busy,
    }
}

pub fn wallet_button(is_connected: bool) -> ButtonModel {
    if is_connected {
        ButtonModel::plain(DISCONNECT_LABEL, Action::Disconnect)
    } else {
        ButtonModel::plain(CONNECT_LABEL, Action::Connect)
    }
}

pub fn build_screen(snapshot: &AppSnapshot) -> ScreenModel {
    let branch = derive_branch(
        snapshot.sdk_loaded,
        snapshot.address.as_deref(),
        snapshot.is_weekend,
        snapshot.minted,
    );

    let blocks = match branch {
        ViewBranch::Loading => {
            return ScreenModel {
                branch,
                blocks: vec![Block::Placeholder(LOADING_TEXT)],
                wallet_button: None,
                footer: None,
            };
        }
        ViewBranch::Disconnected => vec![
            Block::Heading("Is it the Weekend?"),
            Block::Paragraph("Mint an NFT, but only on the weekend"),
            Block::Image { src: IMAGE_INTRO, alt: "isittheweekend" },
        ],
        ViewBranch::WeekendUnminted => vec![
            Block::Heading("Status: The Weekend"),
            Block::Paragraph("You can now mint The Weekend for free!"),
            Block::Image { src: IMAGE_WEEKEND, alt: "theweekend" },
            Block::Button(mint_button(snapshot.mint_pending, snapshot.mint_confirming)),
        ],
        ViewBranch::WeekendMinted => vec![
            Block::Heading("Mint Successful!"),
            Block::Paragraph("Congrats!! Enjoy the weekend 🫡"),
            Block::Image { src: IMAGE_MINTED, alt: "theweekend" },
            Block::Button(ButtonModel::plain(SHARE_LABEL, Action::Share)),
        ],
        ViewBranch::NotWeekend => vec![
            Block::Heading("Status: Not The Weekend"),
            Block::Image { src: IMAGE_NOT_WEEKEND, alt: "theweekend" },
            Block::Paragraph("Come back after 12am UTC on Saturday"),
        ],
    };

    ScreenModel {
        branch,
        blocks,
        wallet_button: Some(wallet_button(snapshot.is_connected)),
        footer: Some(FooterModel {
            logo: FOOTER_LOGO,
            alt: "pinatalogo",
            action: Action::OpenFooter,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0xAbC0000000000000000000000000000000001234";

    fn connected(is_weekend: bool, minted: bool) -> AppSnapshot {
        AppSnapshot {
            sdk_loaded: true,
            address: Some(ADDR.to_string()),
            is_connected: true,
            is_weekend,
            minted,
            ..AppSnapshot::default()
        }
    }

    fn buttons(screen: &ScreenModel) -> Vec<&ButtonModel> {
        screen
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Button(button) => Some(button),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_loading_wins_over_everything() {
        for address in [None, Some(ADDR)] {
            for is_weekend in [false, true] {
                for minted in [false, true] {
                    assert_eq!(derive_branch(false, address, is_weekend, minted), ViewBranch::Loading);
                }
            }
        }
    }

    #[test]
    fn test_no_address_is_disconnected_regardless_of_flags() {
        for is_weekend in [false, true] {
            for minted in [false, true] {
                assert_eq!(derive_branch(true, None, is_weekend, minted), ViewBranch::Disconnected);
            }
        }
    }

    #[test]
    fn test_connected_branches() {
        assert_eq!(derive_branch(true, Some(ADDR), true, false), ViewBranch::WeekendUnminted);
        assert_eq!(derive_branch(true, Some(ADDR), true, true), ViewBranch::WeekendMinted);
        assert_eq!(derive_branch(true, Some(ADDR), false, false), ViewBranch::NotWeekend);
        assert_eq!(derive_branch(true, Some(ADDR), false, true), ViewBranch::NotWeekend);
    }

    #[test]
    fn test_loading_screen_is_only_the_placeholder() {
        let snapshot = AppSnapshot {
            address: Some(ADDR.to_string()),
            is_connected: true,
            is_weekend: true,
            ..AppSnapshot::default()
        };
        let screen = build_screen(&snapshot);
        assert_eq!(screen.blocks, vec![Block::Placeholder("Loading...")]);
        assert!(screen.wallet_button.is_none());
        assert!(screen.footer.is_none());
    }

    #[test]
    fn test_disconnected_screen() {
        let screen = build_screen(&AppSnapshot {
            sdk_loaded: true,
            ..AppSnapshot::default()
        });
        assert_eq!(screen.branch, ViewBranch::Disconnected);
        assert_eq!(screen.blocks.len(), 3);
        assert_eq!(screen.blocks[0], Block::Heading("Is it the Weekend?"));
        assert!(matches!(screen.blocks[1], Block::Paragraph(_)));
        assert!(matches!(screen.blocks[2], Block::Image { src: IMAGE_INTRO, .. }));
        assert_eq!(screen.wallet_button.map(|b| (b.label, b.action)), Some(("Connect", Action::Connect)));
    }

    #[test]
    fn test_weekend_screen_has_enabled_mint() {
        let screen = build_screen(&connected(true, false));
        assert_eq!(screen.blocks[0], Block::Heading("Status: The Weekend"));
        let mint = buttons(&screen);
        assert_eq!(mint.len(), 1);
        assert_eq!(mint[0].label, "Mint");
        assert_eq!(mint[0].action, Action::Mint);
        assert!(!mint[0].disabled);
        assert!(!mint[0].spinner);
    }

    #[test]
    fn test_pending_mint_is_disabled_with_spinner() {
        let mut snapshot = connected(true, false);
        snapshot.mint_pending = true;
        let screen = build_screen(&snapshot);
        let mint = buttons(&screen)[0].clone();
        assert_eq!(mint.label, "Minting...");
        assert!(mint.disabled);
        assert!(mint.spinner);
    }

    #[test]
    fn test_confirming_mint_keeps_spinner() {
        assert_eq!(mint_button(false, true).label, MINTING_LABEL);
        assert!(mint_button(false, true).disabled);
        assert_eq!(mint_button(false, false).label, MINT_LABEL);
    }

    #[test]
    fn test_minted_screen_offers_share() {
        let screen = build_screen(&connected(true, true));
        assert_eq!(screen.branch, ViewBranch::WeekendMinted);
        assert_eq!(screen.blocks[0], Block::Heading("Mint Successful!"));
        let share = buttons(&screen);
        assert_eq!(share.len(), 1);
        assert_eq!((share[0].label, share[0].action), ("Share", Action::Share));
    }

    #[test]
    fn test_not_weekend_screen_has_no_mint_control() {
        let screen = build_screen(&connected(false, false));
        assert_eq!(screen.blocks[0], Block::Heading("Status: Not The Weekend"));
        assert!(buttons(&screen).is_empty());
        assert_eq!(screen.wallet_button.map(|b| b.label), Some("Disconnect"));
    }

    #[test]
    fn test_wallet_button_follows_connection_not_address() {
        // connector reconnecting: connected flag set, address not yet known
        let snapshot = AppSnapshot {
            sdk_loaded: true,
            is_connected: true,
            ..AppSnapshot::default()
        };
        let screen = build_screen(&snapshot);
        assert_eq!(screen.branch, ViewBranch::Disconnected);
        assert_eq!(screen.wallet_button.map(|b| b.action), Some(Action::Disconnect));
    }

    #[test]
    fn test_every_loaded_screen_has_footer() {
        for snapshot in [connected(true, false), connected(true, true), connected(false, false)] {
            let footer = build_screen(&snapshot).footer.unwrap();
            assert_eq!(footer.action, Action::OpenFooter);
            assert_eq!(footer.logo, "/pinata.png");
        }
    }
}
