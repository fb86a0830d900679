//! Display strings keyed by a closed set of identifiers.
//!
//! Every [`TextKey`] has a translation for every [`Language`]; adding a key
//! without translating it is a compile error.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Arabic => "AR",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    StoreTitle,
    SignedIn,
    SignedOut,
    NavHome,
    NavSearch,
    NavWishlist,
    NavCart,
    NavProfile,
    SearchTitle,
    SearchPlaceholder,
    SearchNoResults,
    SearchHint,
    NotificationsTitle,
    NotificationsEmpty,
    SignInPrompt,
    PageFeatured,
    PageWishlistEmpty,
    PageCartEmpty,
    PageProfile,
    PageNotFound,
    PageBackHint,
    SlideSummerSaleTitle,
    SlideSummerSaleSubtitle,
    SlideNewArrivalsTitle,
    SlideNewArrivalsSubtitle,
    SlideToolsTitle,
    SlideToolsSubtitle,
    SlideFreeShippingTitle,
    SlideFreeShippingSubtitle,
}

/// Localization collaborator. Pure lookup, no side effects.
pub trait Localizer: Send + Sync {
    fn translate(&self, key: TextKey, language: Language) -> &'static str;
}

/// Built-in string table.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticLocalizer;

impl Localizer for StaticLocalizer {
    fn translate(&self, key: TextKey, language: Language) -> &'static str {
        match language {
            Language::English => english(key),
            Language::Arabic => arabic(key),
        }
    }
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::StoreTitle => "Ok-E-store",
        TextKey::SignedIn => "Signed in",
        TextKey::SignedOut => "Guest",
        TextKey::NavHome => "Home",
        TextKey::NavSearch => "Search",
        TextKey::NavWishlist => "Wishlist",
        TextKey::NavCart => "Cart",
        TextKey::NavProfile => "Profile",
        TextKey::SearchTitle => "Search products",
        TextKey::SearchPlaceholder => "Type to search...",
        TextKey::SearchNoResults => "No matching products",
        TextKey::SearchHint => "Up/Down: Move  Enter: Open  Ctrl+F: Favorite  Esc: Close",
        TextKey::NotificationsTitle => "Notifications",
        TextKey::NotificationsEmpty => "You're all caught up",
        TextKey::SignInPrompt => "Sign in to continue? (y/n)",
        TextKey::PageFeatured => "Featured products",
        TextKey::PageWishlistEmpty => "Your wishlist is empty",
        TextKey::PageCartEmpty => "Your cart is empty",
        TextKey::PageProfile => "Your account",
        TextKey::PageNotFound => "Nothing here yet",
        TextKey::PageBackHint => "Backspace: Back  ←/→: Banner  Enter: Open banner  n: Notifications  l: Language  o: Sign out  q: Quit",
        TextKey::SlideSummerSaleTitle => "Summer Sale",
        TextKey::SlideSummerSaleSubtitle => "Up to 50% off selected items",
        TextKey::SlideNewArrivalsTitle => "New Arrivals",
        TextKey::SlideNewArrivalsSubtitle => "Fresh picks for this week",
        TextKey::SlideToolsTitle => "Creator Tools",
        TextKey::SlideToolsSubtitle => "Everything you need to build your shop",
        TextKey::SlideFreeShippingTitle => "Free Shipping",
        TextKey::SlideFreeShippingSubtitle => "On every order over $50",
    }
}

fn arabic(key: TextKey) -> &'static str {
    match key {
        TextKey::StoreTitle => "متجر أوكي",
        TextKey::SignedIn => "تم تسجيل الدخول",
        TextKey::SignedOut => "زائر",
        TextKey::NavHome => "الرئيسية",
        TextKey::NavSearch => "بحث",
        TextKey::NavWishlist => "المفضلة",
        TextKey::NavCart => "السلة",
        TextKey::NavProfile => "حسابي",
        TextKey::SearchTitle => "ابحث عن المنتجات",
        TextKey::SearchPlaceholder => "اكتب للبحث...",
        TextKey::SearchNoResults => "لا توجد منتجات مطابقة",
        TextKey::SearchHint => "أعلى/أسفل: تنقل  Enter: فتح  Ctrl+F: مفضلة  Esc: إغلاق",
        TextKey::NotificationsTitle => "الإشعارات",
        TextKey::NotificationsEmpty => "لا توجد إشعارات جديدة",
        TextKey::SignInPrompt => "تسجيل الدخول للمتابعة؟ (y/n)",
        TextKey::PageFeatured => "منتجات مميزة",
        TextKey::PageWishlistEmpty => "قائمة المفضلة فارغة",
        TextKey::PageCartEmpty => "سلة التسوق فارغة",
        TextKey::PageProfile => "حسابك",
        TextKey::PageNotFound => "لا يوجد شيء هنا بعد",
        TextKey::PageBackHint => "Backspace: رجوع  ←/→: البانر  Enter: فتح البانر  n: الإشعارات  l: اللغة  o: تسجيل الخروج  q: خروج",
        TextKey::SlideSummerSaleTitle => "تخفيضات الصيف",
        TextKey::SlideSummerSaleSubtitle => "خصم حتى 50% على منتجات مختارة",
        TextKey::SlideNewArrivalsTitle => "وصل حديثاً",
        TextKey::SlideNewArrivalsSubtitle => "اختيارات جديدة لهذا الأسبوع",
        TextKey::SlideToolsTitle => "أدوات المبدعين",
        TextKey::SlideToolsSubtitle => "كل ما تحتاجه لبناء متجرك",
        TextKey::SlideFreeShippingTitle => "شحن مجاني",
        TextKey::SlideFreeShippingSubtitle => "على كل طلب يتجاوز 50$",
    }
}
