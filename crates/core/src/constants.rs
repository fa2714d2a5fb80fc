/// Number of activities shown in the at-a-glance table
pub const DEFAULT_TOP_ACTIVITIES: usize = 5;

/// Banner shown when a refresh fails
pub const REFRESH_ERROR_MESSAGE: &str = "فشل تحميل البيانات. يرجى المحاولة لاحقًا.";

/// Placeholder for a missing city or date in activity rows
pub const UNSPECIFIED_TEXT: &str = "غير محدد";

/// Date format used for stamped and exported dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Prefix of every exported report file name
pub const EXPORT_FILE_PREFIX: &str = "تقرير_أطلس_ليبيا_السياحي";
