//! The command catalog: every command the shell recognizes, with its output.
//!
//! Commands are immutable and defined at startup. An output is either a
//! static string, a pure function of the arguments and the ambient clock, or
//! a control signal the app intercepts instead of printing.

use crate::services::clock::Clock;
use std::time::Instant;

/// Control signals carried by reserved commands instead of printable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Empty the transcript and reset recall.
    Clear,
    /// Launch the full-screen matrix rain overlay.
    Matrix,
    /// Render the achievement panel.
    Achievements,
    /// Toggle the UI language preference.
    Lang,
}

/// Ambient inputs available to dynamic command outputs.
pub struct CommandContext<'a> {
    pub args: &'a [String],
    pub clock: &'a dyn Clock,
    /// When the current shell session started, for `uptime`.
    pub started_at: Instant,
}

#[derive(Clone, Copy)]
pub enum Output {
    Static(&'static str),
    Dynamic(fn(&CommandContext) -> String),
    Signal(Signal),
}

/// A resolved output, ready for the app to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Text(String),
    Signal(Signal),
}

pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub output: Output,
}

impl Command {
    pub fn resolve(&self, ctx: &CommandContext) -> Resolved {
        match self.output {
            Output::Static(text) => Resolved::Text(text.to_string()),
            Output::Dynamic(f) => Resolved::Text(f(ctx)),
            Output::Signal(signal) => Resolved::Signal(signal),
        }
    }
}

const HELP: &str = "Commandes disponibles : whoami, skills, projects, certifs, contact, cv, \
clear, ls, pwd, uname, ping, nmap, echo, date, uptime, lang, achievements, sudo hire-me\n\
Il y en a d'autres... à vous de les trouver.";

const WHOAMI: &str = "Hakick (Maxime) — AI Security Engineer in the making";

const SKILLS: &str = "\
┌─────────────────────────┬───────┐\n\
│ Cloud / DevOps          │ ██████░░ 85% │\n\
│ Monitoring              │ ███████░ 90% │\n\
│ Cybersécurité           │ █████░░░ 75% │\n\
│ IA / IA Générative      │ █████░░░ 70% │\n\
└─────────────────────────┴───────┘";

const PROJECTS: &str = "\
  [✓] Object Detection YOLOv8    — IA de détection custom\n\
  [~] Agent IA Discord            — Résumés auto de vidéos\n\
  [~] Chatbot IA Cybersécurité    — Assistant pentest IA\n\
  [✓] NFC Reader Exploit          — Exploitation lecteur NFC\n\
  [~] Domotique Cloud-Native      — IoT + AWS IoT Core\n\
  [✓] Cluster Kubernetes          — k0s + CI/CD + monitoring\n\
  [~] Ce Portfolio                — Multi-agent Claude Code";

const LS: &str = "about.txt  skills/  projects/  certifs.md  contact.sh  .secret";

const ABOUT: &str = "Étudiant en dernière année à Epitech, spécialisé cloud computing et \
cybersécurité. Administrateur systèmes et réseaux avec un rôle de tech lead (backup, \
supervision, environnements critiques). Passionné par la sécurité des LLM, leur \
industrialisation et leur intégration en entreprise.";

const SECRET_TEASER: &str = "Nice try ;) — But there's nothing hidden here... or is there?";

const SECRET_FLAG: &str = "\
[FOUND] Decrypting .secret with elevated privileges...\n\
FLAG{w3lc0m3_t0_h4k1ck0s}\n\
Well played. Type 'achievements' to check your progress.";

const CERTIFS: &str = "\
┌──────────────────────┬─────────────┬────────────┐\n\
│ Certification        │ Organisme   │ Statut     │\n\
├──────────────────────┼─────────────┼────────────┤\n\
│ eJPTv2               │ INE Security│ ✓ Obtained │\n\
│ AZ-900               │ Microsoft   │ ○ Preparing│\n\
│ AWS Cloud Practitioner│ AWS        │ ○ Preparing│\n\
│ AWS AI Practitioner  │ AWS         │ ~ In progress│\n\
└──────────────────────┴─────────────┴────────────┘";

const CONTACT: &str = "\
📧 Email:  contact@hakick.dev\n\
🐙 GitHub: https://github.com/juninhomax\n\
📍 Location: France";

const CV: &str = "Downloading CV... → see https://hakick.dev/cv.pdf";

const HIRE_ME: &str =
    "Permission granted. Sending CV to recruiter... ✓ Done. Expect a call soon.";

const PWD: &str = "/home/hakick/portfolio";

const UNAME: &str = "HakickOS 1.0 — Powered by curiosity and caffeine";

const PING: &str = "PONG — Latency: 0ms (I'm always available)";

const NMAP: &str = "Scanning portfolio.hakick.dev... 443/tcp open — All services nominal.";

const EXIT: &str = "Pourquoi partir ? Il y a encore tant à découvrir... (Ctrl+Q si vous insistez)";

const HACK: &str = "\
[SCAN] Target: portfolio.hakick.dev\n\
[SCAN] Enumerating open ports... 22/tcp filtered, 443/tcp open\n\
[INFO] Fingerprinting services... HakickOS 1.0\n\
[EXPLOIT] Injecting payload into /dev/portfolio...\n\
[VULN] Found 1 critical weakness: owner is too passionate\n\
[ACCESS] Root shell acquired.\n\
[OK] Just kidding. Everything here is public anyway.";

const RM_RF: &str = "\
[RED]rm: descending into /home/hakick/portfolio...\n\
[RED]rm: removing skills/ ... failed (skills are permanent)\n\
[RED]rm: removing projects/ ... failed (backed up to GitHub)\n\
[RED]rm: removing .secret ... failed (nice try)\n\
[ABORT] Filesystem is read-only. This portfolio is indestructible.";

fn echo(ctx: &CommandContext) -> String {
    let joined = ctx.args.join(" ");
    strip_quotes(&joined).to_string()
}

/// Strip one matching pair of surrounding quotes, shell style.
fn strip_quotes(text: &str) -> &str {
    let trimmed = text.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    trimmed
}

fn date(ctx: &CommandContext) -> String {
    ctx.clock.datetime_string()
}

fn uptime(ctx: &CommandContext) -> String {
    let elapsed = ctx.clock.now().saturating_duration_since(ctx.started_at);
    let secs = elapsed.as_secs();
    format!(
        "up {:02}:{:02}:{:02} — availability 99.97% (the other 0.03% is coffee breaks)",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60
    )
}

/// The fixed command catalog, in display order.
pub static CATALOG: &[Command] = &[
    Command {
        name: "whoami",
        description: "Display current user",
        output: Output::Static(WHOAMI),
    },
    Command {
        name: "help",
        description: "List available commands",
        output: Output::Static(HELP),
    },
    Command {
        name: "skills",
        description: "Display skills overview",
        output: Output::Static(SKILLS),
    },
    Command {
        name: "projects",
        description: "List all projects",
        output: Output::Static(PROJECTS),
    },
    Command {
        name: "ls",
        description: "List directory contents",
        output: Output::Static(LS),
    },
    Command {
        name: "cat about.txt",
        description: "Display about file",
        output: Output::Static(ABOUT),
    },
    Command {
        name: "cat .secret",
        description: "Try to read secret file",
        output: Output::Static(SECRET_TEASER),
    },
    Command {
        name: "sudo cat .secret",
        description: "Read secret file with sudo",
        output: Output::Static(SECRET_FLAG),
    },
    Command {
        name: "certifs",
        description: "Display certifications",
        output: Output::Static(CERTIFS),
    },
    Command {
        name: "contact",
        description: "Display contact info",
        output: Output::Static(CONTACT),
    },
    Command {
        name: "cv",
        description: "Download CV",
        output: Output::Static(CV),
    },
    Command {
        name: "clear",
        description: "Clear terminal",
        output: Output::Signal(Signal::Clear),
    },
    Command {
        name: "sudo hire-me",
        description: "Easter egg hire command",
        output: Output::Static(HIRE_ME),
    },
    Command {
        name: "pwd",
        description: "Print working directory",
        output: Output::Static(PWD),
    },
    Command {
        name: "uname",
        description: "Display system info",
        output: Output::Static(UNAME),
    },
    Command {
        name: "ping",
        description: "Ping test",
        output: Output::Static(PING),
    },
    Command {
        name: "nmap",
        description: "Network scan simulation",
        output: Output::Static(NMAP),
    },
    Command {
        name: "exit",
        description: "Try to exit",
        output: Output::Static(EXIT),
    },
    Command {
        name: "matrix",
        description: "Enter the Matrix",
        output: Output::Signal(Signal::Matrix),
    },
    Command {
        name: "hack",
        description: "Run a very serious intrusion",
        output: Output::Static(HACK),
    },
    Command {
        name: "rm -rf /",
        description: "Destroy everything (or not)",
        output: Output::Static(RM_RF),
    },
    Command {
        name: "achievements",
        description: "Show achievement progress",
        output: Output::Signal(Signal::Achievements),
    },
    Command {
        name: "echo",
        description: "Print text",
        output: Output::Dynamic(echo),
    },
    Command {
        name: "date",
        description: "Display current date",
        output: Output::Dynamic(date),
    },
    Command {
        name: "uptime",
        description: "Display session uptime",
        output: Output::Dynamic(uptime),
    },
    Command {
        name: "lang",
        description: "Toggle language (fr/en)",
        output: Output::Signal(Signal::Lang),
    },
];

/// Look up a command by its exact name.
pub fn by_name(name: &str) -> Option<&'static Command> {
    CATALOG.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::TestClock;
    use std::time::Duration;

    fn ctx<'a>(args: &'a [String], clock: &'a TestClock) -> CommandContext<'a> {
        CommandContext {
            args,
            clock,
            started_at: clock.now(),
        }
    }

    #[test]
    fn catalog_names_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn echo_strips_surrounding_quotes() {
        let clock = TestClock::new();
        let args = vec!["\"hi".to_string(), "there\"".to_string()];
        let resolved = by_name("echo").unwrap().resolve(&ctx(&args, &clock));
        assert_eq!(resolved, Resolved::Text("hi there".to_string()));
    }

    #[test]
    fn echo_without_quotes_passes_through() {
        let clock = TestClock::new();
        let args = vec!["plain".to_string(), "text".to_string()];
        let resolved = by_name("echo").unwrap().resolve(&ctx(&args, &clock));
        assert_eq!(resolved, Resolved::Text("plain text".to_string()));
    }

    #[test]
    fn echo_leaves_unbalanced_quote_alone() {
        assert_eq!(strip_quotes("\"unterminated"), "\"unterminated");
        assert_eq!(strip_quotes("'"), "'");
    }

    #[test]
    fn uptime_reads_the_ambient_clock() {
        let clock = TestClock::new();
        let started = clock.now();
        clock.advance(Duration::from_secs(3723)); // 01:02:03
        let context = CommandContext {
            args: &[],
            clock: &clock,
            started_at: started,
        };
        let resolved = by_name("uptime").unwrap().resolve(&context);
        match resolved {
            Resolved::Text(text) => assert!(text.starts_with("up 01:02:03")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn clear_resolves_to_a_signal() {
        let clock = TestClock::new();
        let resolved = by_name("clear").unwrap().resolve(&ctx(&[], &clock));
        assert_eq!(resolved, Resolved::Signal(Signal::Clear));
    }

    #[test]
    fn secret_path_reveals_a_flag() {
        match by_name("sudo cat .secret").unwrap().output {
            Output::Static(text) => assert!(text.contains("FLAG{")),
            _ => panic!("expected static output"),
        }
    }
}
