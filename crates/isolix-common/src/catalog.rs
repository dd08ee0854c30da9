//! Static app catalog: the library modal's categories and the quick-access dock.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppEntry {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AppCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub apps: &'static [AppEntry],
}

const fn app(name: &'static str, url: &'static str) -> AppEntry {
    AppEntry { name, url }
}

pub const APP_LIBRARY: &[AppCategory] = &[
    AppCategory {
        id: "google",
        name: "Google Suite",
        apps: &[
            app("Google Search", "https://google.com"),
            app("Docs", "https://docs.google.com"),
            app("Sheets", "https://sheets.google.com"),
            app("Slides", "https://slides.google.com"),
            app("Forms", "https://forms.google.com"),
            app("Drive", "https://drive.google.com"),
            app("Meet", "https://meet.google.com"),
            app("Calendar", "https://calendar.google.com"),
            app("Keep", "https://keep.google.com"),
            app("Sites", "https://sites.google.com"),
            app("Colab", "https://colab.research.google.com"),
        ],
    },
    AppCategory {
        id: "microsoft",
        name: "Microsoft 365",
        apps: &[
            app("See All Microsoft", "https://www.office.com/apps"),
            app("Word", "https://word.office.com"),
            app("Excel", "https://excel.office.com"),
            app("PowerPoint", "https://powerpoint.office.com"),
            app("OneNote", "https://onenote.office.com"),
            app("Outlook", "https://outlook.office.com"),
            app("Teams", "https://teams.microsoft.com"),
            app("OneDrive", "https://onedrive.live.com"),
            app("Power BI", "https://powerbi.microsoft.com"),
            app("Azure DevOps", "https://dev.azure.com"),
        ],
    },
    AppCategory {
        id: "ai",
        name: "AI Platforms",
        apps: &[
            app("ChatGPT", "https://chat.openai.com"),
            app("Claude", "https://claude.ai"),
            app("Gemini", "https://gemini.google.com"),
            app("Copilot", "https://copilot.microsoft.com"),
            app("Perplexity", "https://perplexity.ai"),
            app("DeepSeek", "https://chat.deepseek.com"),
            app("Kimi AI", "https://kimi.moonshot.cn"),
            app("Qwen", "https://qwen.ai"),
            app("Baidu ERNIE", "https://yiyan.baidu.com"),
        ],
    },
    AppCategory {
        id: "dev_web",
        name: "Cloud Dev",
        apps: &[
            app("GitHub Codespaces", "https://github.com/codespaces"),
            app("Gitpod", "https://gitpod.io"),
            app("Replit", "https://replit.com"),
            app("StackBlitz", "https://stackblitz.com"),
            app("CodeSandbox", "https://codesandbox.io"),
        ],
    },
    AppCategory {
        id: "aws",
        name: "Amazon AWS",
        apps: &[
            app("AWS Console", "https://console.aws.amazon.com"),
            app("Cloud9", "https://aws.amazon.com/cloud9"),
            app("SageMaker", "https://studio.sagemaker.aws"),
            app("Lambda", "https://aws.amazon.com/lambda"),
            app("S3", "https://aws.amazon.com/s3"),
        ],
    },
    AppCategory {
        id: "datascience",
        name: "Data Science",
        apps: &[
            app("Jupyter", "https://jupyter.org/try"),
            app("Kaggle", "https://www.kaggle.com/code"),
            app("Deepnote", "https://deepnote.com"),
            app("Observable", "https://observablehq.com"),
        ],
    },
    AppCategory {
        id: "git",
        name: "Code Hosting",
        apps: &[
            app("GitHub", "https://github.com"),
            app("GitLab", "https://gitlab.com"),
            app("Bitbucket", "https://bitbucket.org"),
            app("SourceForge", "https://sourceforge.net"),
        ],
    },
    AppCategory {
        id: "writing",
        name: "Publishing",
        apps: &[
            app("Medium", "https://medium.com"),
            app("Substack", "https://substack.com"),
            app("Dev.to", "https://dev.to"),
            app("Hashnode", "https://hashnode.com"),
            app("Notion", "https://notion.so"),
        ],
    },
];

/// Apps pinned to the dock under the panel strip.
pub const DOCK_APPS: &[AppEntry] = &[
    app("Brave", "https://search.brave.com/?lang=en-in"),
    app("YouTube", "https://youtube.com"),
    app("ChatGPT", "https://chatgpt.com"),
    app("Notion", "https://notion.so"),
    app("GitHub", "https://github.com/codespaces"),
];

pub fn find_category(id: &str) -> Option<&'static AppCategory> {
    APP_LIBRARY.iter().find(|c| c.id == id)
}

/// Case-insensitive lookup across every category, then the dock.
pub fn find_app(name: &str) -> Option<&'static AppEntry> {
    APP_LIBRARY
        .iter()
        .flat_map(|c| c.apps.iter())
        .chain(DOCK_APPS.iter())
        .find(|a| a.name.eq_ignore_ascii_case(name))
}
