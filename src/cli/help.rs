//! Usage text.

/// Printed for `--help` / `-h`.
pub const USAGE: &str = "\
👻 Ghostie - Ghost in the Shell Personality System

Usage:
    ghostie                 # Load personality into context
    ghostie --memorize      # Store a memory with timestamp
    ghostie --remember      # Recall relevant memories
    ghostie --tools         # List available tools and capabilities
    ghostie --haunt         # Discover and profile current environment
    ghostie --version       # Show version information
    ghostie --update        # Update this script with new tools/memories

All arguments except --help/-h are passed to the ghostie script unchanged.

Requirements:
    - Python 3.x
    - JSON support (built into Python)
    - Terminal environment (Termux, Linux, macOS)

Environment:
    GHOSTIE_PYTHON          Interpreter to use (default: python3)
    GHOSTIE_SCRIPT          Path to the ghostie script (default: next to bin/)
    GHOSTIE_LOG             Launcher log filter, e.g. ghostie=debug

Installation:
    npm install -g ghostie

Repository:
    https://github.com/jonathanpopham/ghostie

Issues:
    https://github.com/jonathanpopham/ghostie/issues";
