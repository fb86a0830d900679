use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const BANNER_HEIGHT: u16 = 7;
const NOTIFICATION_PANEL_WIDTH: u16 = 44;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub banner: Rect,
    pub page: Rect,
    pub nav: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let nav_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let nav = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(nav_height),
        width: area.width,
        height: nav_height,
    };
    let body_height = area.height.saturating_sub(header_height + nav_height);
    let banner_height = BANNER_HEIGHT.min(body_height);
    let banner = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: banner_height,
    };
    let page = Rect {
        x: area.x,
        y: banner.y + banner_height,
        width: area.width,
        height: body_height.saturating_sub(banner_height),
    };
    Regions {
        header,
        banner,
        page,
        nav,
    }
}

/// Search overlay bounds: centred over everything between header and nav.
pub fn search_rect(regions: &Regions) -> Rect {
    let body = Rect {
        x: regions.banner.x,
        y: regions.banner.y,
        width: regions.banner.width,
        height: regions.banner.height + regions.page.height,
    };
    centered_rect(70, 80, body)
}

/// Notification panel bounds: anchored under the right end of the header.
pub fn notification_rect(regions: &Regions, item_count: usize) -> Rect {
    let width = NOTIFICATION_PANEL_WIDTH.min(regions.header.width);
    let available = regions.banner.height + regions.page.height;
    let height = ((item_count.max(1) * 2) as u16 + 2).min(available);
    Rect {
        x: regions.header.x + regions.header.width.saturating_sub(width),
        y: regions.banner.y,
        width,
        height,
    }
}

pub fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && y >= area.y && x < area.x + area.width && y < area.y + area.height
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
