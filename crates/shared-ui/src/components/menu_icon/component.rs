use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdCalendar, LdClipboardList, LdClock, LdFileText, LdFolder, LdGraduationCap,
    LdLayoutDashboard, LdMessageSquare, LdSettings, LdShield, LdSparkles, LdTrendingUp, LdUser,
    LdUserPlus, LdUsers, LdWallet,
};
use dioxus_free_icons::Icon;
use shared_types::MenuIcon;

/// Lucide glyph for a menu icon reference.
#[component]
pub fn MenuIconGlyph(icon: MenuIcon, #[props(default = 18)] size: u32) -> Element {
    match icon {
        MenuIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: size, height: size } },
        MenuIcon::People => rsx! { Icon::<LdUsers> { icon: LdUsers, width: size, height: size } },
        MenuIcon::Person => rsx! { Icon::<LdUser> { icon: LdUser, width: size, height: size } },
        MenuIcon::Enroll => rsx! { Icon::<LdUserPlus> { icon: LdUserPlus, width: size, height: size } },
        MenuIcon::Book => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: size, height: size } },
        MenuIcon::Checklist => rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: size, height: size } },
        MenuIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: size, height: size } },
        MenuIcon::Clock => rsx! { Icon::<LdClock> { icon: LdClock, width: size, height: size } },
        MenuIcon::Document => rsx! { Icon::<LdFileText> { icon: LdFileText, width: size, height: size } },
        MenuIcon::Folder => rsx! { Icon::<LdFolder> { icon: LdFolder, width: size, height: size } },
        MenuIcon::Message => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: size, height: size } },
        MenuIcon::Sparkles => rsx! { Icon::<LdSparkles> { icon: LdSparkles, width: size, height: size } },
        MenuIcon::Trend => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: size, height: size } },
        MenuIcon::Wallet => rsx! { Icon::<LdWallet> { icon: LdWallet, width: size, height: size } },
        MenuIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: size, height: size } },
        MenuIcon::Shield => rsx! { Icon::<LdShield> { icon: LdShield, width: size, height: size } },
        MenuIcon::Graduation => rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: size, height: size } },
    }
}
