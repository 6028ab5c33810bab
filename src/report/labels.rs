use std::path::Path;

use crate::config::Language;

/// Fixed report and console text for one language.
#[derive(Debug)]
pub struct Labels {
    pub language: Language,
    pub tag: &'static str,
    pub next_session: &'static str,
    pub open_hint: &'static str,
    pub session_progress: &'static str,
    pub time_progress: &'static str,
    pub total_time: &'static str,
    pub remaining_time: &'static str,
    pub last_updated: &'static str,
    pub footer: &'static str,
    pub index_title: &'static str,
    pub index_info: &'static str,
    pub index_header: &'static str,
    pub index_rule: &'static str,
    pub prompt_root: &'static str,
    pub no_videos: &'static str,
}

static EN: Labels = Labels {
    language: Language::En,
    tag: "**📌 Tag:**",
    next_session: "> [!note] 🎯 **Next Session:**",
    open_hint: "> [!tip] Click on a video name to open it directly.",
    session_progress: "**🎯 Session Progress:**",
    time_progress: "**⏳ Time Progress:**",
    total_time: "📦 Total Course Time:",
    remaining_time: "🕒 Remaining Time:",
    last_updated: "📅 Last Updated:",
    footer: "> [!success] Statistics calculated automatically.",
    index_title: "# 📂 Main Course Dashboard",
    index_info: "> [!info] List of all courses and their progress",
    index_header: "| 🎬 Course | Session Progress | Time Progress |",
    index_rule: "|----------|------------------|---------------|",
    prompt_root: "📂 Enter the path to the main courses folder: ",
    no_videos: "⚠️ No videos found in any folder.",
};

static FA: Labels = Labels {
    language: Language::Fa,
    tag: "**📌 تگ:**",
    next_session: "> [!note] 🎯 **جلسه بعدی:**",
    open_hint: "> [!tip] روی نام هر ویدیو کلیک کن تا مستقیماً باز شود.",
    session_progress: "**🎯 پیشرفت جلسات:**",
    time_progress: "**⏳ پیشرفت زمانی:**",
    total_time: "📦 زمان کل دوره:",
    remaining_time: "🕒 زمان باقی‌مانده:",
    last_updated: "📅 آخرین بروزرسانی:",
    footer: "> [!success] آمار به‌صورت خودکار محاسبه شد.",
    index_title: "# 📂 داشبورد اصلی دوره‌ها",
    index_info: "> [!info] لیست همه دوره‌ها و درصد پیشرفت آن‌ها",
    index_header: "| 🎬 دوره | پیشرفت جلسات | پیشرفت زمانی |",
    index_rule: "|---------|----------------|----------------|",
    prompt_root: "📂 مسیر پوشه اصلی دوره‌ها را وارد کنید: ",
    no_videos: "⚠️ هیچ ویدیویی یافت نشد.",
};

impl Labels {
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::En => &EN,
            Language::Fa => &FA,
        }
    }

    pub fn missing_root(&self, path: &Path) -> String {
        match self.language {
            Language::En => format!("Error: Path {} does not exist.", path.display()),
            Language::Fa => format!("خطا: مسیر {} وجود ندارد.", path.display()),
        }
    }

    pub fn index_written(&self, path: &Path) -> String {
        match self.language {
            Language::En => format!("✅ {} created successfully!", path.display()),
            Language::Fa => format!("✅ {} ساخته شد!", path.display()),
        }
    }

    pub fn dashboards_written(&self, count: usize) -> String {
        match self.language {
            Language::En => format!("📝 {count} checklist(s) updated."),
            Language::Fa => format!("📝 {count} چک‌لیست به‌روزرسانی شد."),
        }
    }
}
