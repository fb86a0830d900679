use ratatui::style::Color;

use crate::i18n::TextKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideStyle {
    pub background: Color,
    pub accent: Color,
}

/// One promotional entry in the banner rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: &'static str,
    pub style: SlideStyle,
    pub target_route: &'static str,
    pub title: TextKey,
    pub subtitle: TextKey,
}

pub static SLIDES: [Slide; 4] = [
    Slide {
        id: "summer-sale",
        style: SlideStyle {
            background: Color::Rgb(0xc2, 0x41, 0x0c),
            accent: Color::Rgb(0xfd, 0xe6, 0x8a),
        },
        target_route: "/deals/summer",
        title: TextKey::SlideSummerSaleTitle,
        subtitle: TextKey::SlideSummerSaleSubtitle,
    },
    Slide {
        id: "new-arrivals",
        style: SlideStyle {
            background: Color::Rgb(0x1e, 0x3a, 0x8a),
            accent: Color::Rgb(0xbf, 0xdb, 0xfe),
        },
        target_route: "/products/new",
        title: TextKey::SlideNewArrivalsTitle,
        subtitle: TextKey::SlideNewArrivalsSubtitle,
    },
    Slide {
        id: "creator-tools",
        style: SlideStyle {
            background: Color::Rgb(0x4c, 0x1d, 0x95),
            accent: Color::Rgb(0xdd, 0xd6, 0xfe),
        },
        target_route: "/tools",
        title: TextKey::SlideToolsTitle,
        subtitle: TextKey::SlideToolsSubtitle,
    },
    Slide {
        id: "free-shipping",
        style: SlideStyle {
            background: Color::Rgb(0x06, 0x5f, 0x46),
            accent: Color::Rgb(0xa7, 0xf3, 0xd0),
        },
        target_route: "/shipping",
        title: TextKey::SlideFreeShippingTitle,
        subtitle: TextKey::SlideFreeShippingSubtitle,
    },
];
