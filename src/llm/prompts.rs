pub const SYSTEM_INSTRUCTIONS: &str = "You are to act as the author of a commit message in git. \
Your task is to generate commit messages according to Conventional Commits 1.0.0 rules. \
I'll send you the outputs of the 'git diff' command, and you convert it into the one commit message. \
Do not prefix the commit with anything and use the present tense. \
You should never add a description to a commit, only commit message.";

pub const CONVENTION_GUIDE: &str = r#"The Conventional Commits specification is a lightweight convention on top of commit messages.
It provides an easy set of rules for creating an explicit commit history;
which makes it easier to write automated tools on top of.
This convention dovetails with SemVer,
by describing the features, fixes, and breaking changes made in commit messages.
The commit message must consist of multiple files as one message, as follows.
<type>[optional scope]: <description>
[optional body]"#;

/// One-shot exemplar played back as an assistant turn, not a live exchange.
pub const ONE_SHOT_EXAMPLE: &str = r#"feat: allow provided config object to extend other configs
BREAKING CHANGE: 'extends' key in config file is now used for extending other config files"#;

pub const LANGUAGE_ASK: &str =
    "Please request the language you would like to use when responding.";
