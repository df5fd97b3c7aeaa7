use crate::{
    core::{
        exec::Platform,
        pattern::{CommandSpec, Registry},
    },
    help::{HelpSection, HelpTable},
};

pub fn register(r: &mut Registry) {
    // System info
    r.exact("show system info", "hostnamectl", "Shows OS and system information");
    r.exact("show hostname", "hostname", "Shows computer name");
    r.exact("show uptime", "uptime -p", "Shows how long system has been running");
    r.exact("show memory", "free -h", "Shows RAM usage");
    r.exact("show disk", "df -h", "Shows disk space usage");
    r.exact("show disk usage", "du -sh * 2>/dev/null | sort -hr | head -20", "Shows folder sizes");
    r.exact("show cpu", "lscpu | head -20", "Shows CPU information");
    r.exact("show cpu usage", "top -bn1 | head -20", "Shows CPU usage");
    r.exact("show ip", "ip addr show | grep \"inet \"", "Shows IP addresses");
    r.exact("show public ip", "curl -s ifconfig.me", "Shows public IP address");
    r.exact("show users", "who", "Shows logged in users");
    r.exact("show all users", "cat /etc/passwd | cut -d: -f1", "Lists all system users");
    r.exact("show groups", "groups", "Shows your groups");

    // Package management (apt)
    r.exact("update packages", "sudo apt update", "Updates package list");
    r.exact("upgrade packages", "sudo apt upgrade -y", "Upgrades all packages");
    r.exact("update and upgrade", "sudo apt update && sudo apt upgrade -y", "Updates and upgrades all");
    r.exact("show installed", "apt list --installed 2>/dev/null | head -50", "Lists installed packages");
    r.exact("show upgradable", "apt list --upgradable 2>/dev/null", "Lists packages that can be upgraded");
    r.exact("clean packages", "sudo apt autoremove -y && sudo apt autoclean", "Removes unused packages");

    // Services (systemctl)
    r.exact("show services", "systemctl list-units --type=service --state=running", "Lists running services");
    r.exact("show all services", "systemctl list-units --type=service", "Lists all services");
    r.exact("show failed services", "systemctl --failed", "Lists failed services");

    // Firewall (ufw)
    r.exact("firewall status", "sudo ufw status verbose", "Shows firewall status and rules");
    r.exact("firewall enable", "sudo ufw enable", "Enables the firewall");
    r.exact("firewall disable", "sudo ufw disable", "Disables the firewall");
    r.exact("firewall reset", "sudo ufw reset", "Resets all firewall rules");
    r.exact("firewall show rules", "sudo ufw status numbered", "Shows rules with numbers");

    // Processes
    r.exact("show processes", "ps aux | head -30", "Shows running processes");
    r.exact("show top processes", "ps aux --sort=-%mem | head -15", "Shows top memory users");
    r.exact("show top cpu", "ps aux --sort=-%cpu | head -15", "Shows top CPU users");

    // Logs
    r.exact("show system logs", "sudo journalctl -xe | tail -50", "Shows recent system logs");
    r.exact("show boot logs", "sudo journalctl -b | tail -50", "Shows boot logs");
    r.exact("show auth logs", "sudo tail -50 /var/log/auth.log", "Shows authentication logs");
    r.exact("show syslog", "sudo tail -50 /var/log/syslog", "Shows system log");

    // Network
    r.exact("show network", "ip link show", "Shows network interfaces");
    r.exact("show dns", "cat /etc/resolv.conf", "Shows DNS servers");
    r.exact("show hosts", "cat /etc/hosts", "Shows hosts file");
    r.exact("show routing", "ip route", "Shows routing table");

    // Security
    r.exact("show ssh attempts", "sudo grep 'Failed password' /var/log/auth.log | tail -20", "Shows failed SSH logins");
    r.exact("show last logins", "last -20", "Shows last 20 logins");
    r.exact("show sudo users", "getent group sudo", "Shows users with sudo access");

    r.arg("install", install);
    r.arg("remove", remove);
    r.arg("purge", purge);
    r.arg("search package", search_package);
    r.arg("show package", show_package);
    r.arg("service status", service_status);
    r.arg("service start", service_start);
    r.arg("service stop", service_stop);
    r.arg("service restart", service_restart);
    r.arg("service enable", service_enable);
    r.arg("service disable", service_disable);
    r.arg("service logs", service_logs);
    r.arg("firewall allow ssh from", firewall_allow_ssh_from);
    r.arg("firewall allow from", firewall_allow_from);
    r.arg("firewall allow", firewall_allow);
    r.arg("firewall deny", firewall_deny);
    r.arg("firewall delete rule", firewall_delete_rule);
    r.arg("create user", create_user);
    r.arg("delete user", delete_user);
    r.arg("add to sudo", add_to_sudo);
    r.arg("add to group", add_to_group);
    r.arg("switch user", switch_user);
    r.arg("kill process", kill_process);
    r.arg("kill by name", kill_by_name);
    r.arg("find process", find_process);
    r.arg("show disk usage for", show_disk_usage_for);
    r.arg("test connection", test_connection);
    r.arg("trace route", trace_route);
    r.arg("check port", check_port);
    r.arg("make owner", make_owner);
    r.arg("make readable", make_readable);
    r.arg("make writable", make_writable);
    r.arg("make executable", make_executable);
}

fn first_token(args: &str) -> Option<&str> {
    args.split_whitespace().next()
}

fn install(pkg: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("sudo apt install -y {pkg}"),
        format!("Installs {pkg}"),
    ))
}

fn remove(pkg: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("sudo apt remove -y {pkg}"),
        format!("Removes {pkg}"),
    ))
}

fn purge(pkg: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("sudo apt purge -y {pkg}"),
        format!("Completely removes {pkg} and configs"),
    ))
}

fn search_package(pkg: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("apt search {pkg}"),
        format!("Searches for {pkg}"),
    ))
}

fn show_package(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let pkg = first_token(args)?;
    Some(CommandSpec::new(format!("apt show {pkg}"), "Shows package info"))
}

fn service_status(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let service = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo systemctl status {service}"),
        format!("Shows {service} status"),
    ))
}

fn service_start(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let service = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo systemctl start {service}"),
        format!("Starts {service}"),
    ))
}

fn service_stop(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let service = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo systemctl stop {service}"),
        format!("Stops {service}"),
    ))
}

fn service_restart(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let service = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo systemctl restart {service}"),
        format!("Restarts {service}"),
    ))
}

fn service_enable(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let service = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo systemctl enable {service}"),
        format!("Enables {service} on boot"),
    ))
}

fn service_disable(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let service = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo systemctl disable {service}"),
        format!("Disables {service} on boot"),
    ))
}

fn service_logs(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let service = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo journalctl -u {service} -f"),
        format!("Shows {service} logs (live)"),
    ))
}

fn firewall_allow(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let port = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo ufw allow {port}"),
        format!("Allows port {port}"),
    ))
}

fn firewall_deny(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let port = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo ufw deny {port}"),
        format!("Denies port {port}"),
    ))
}

fn firewall_delete_rule(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let num = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo ufw delete {num}"),
        format!("Deletes rule number {num}"),
    ))
}

fn firewall_allow_from(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let ip = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo ufw allow from {ip}"),
        format!("Allows all from {ip}"),
    ))
}

fn firewall_allow_ssh_from(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let ip = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo ufw allow from {ip} to any port 22"),
        format!("Allows SSH from {ip}"),
    ))
}

fn create_user(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let user = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo adduser {user}"),
        format!("Creates new user {user}"),
    ))
}

fn delete_user(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let user = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo deluser {user}"),
        format!("Deletes user {user}"),
    ))
}

fn add_to_sudo(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let user = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo usermod -aG sudo {user}"),
        format!("Gives {user} sudo access"),
    ))
}

fn add_to_group(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let mut parts = args.split_whitespace();
    let user = parts.next()?;
    let group = parts.next()?;
    Some(CommandSpec::new(
        format!("sudo usermod -aG {group} {user}"),
        format!("Adds {user} to {group}"),
    ))
}

fn switch_user(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let user = first_token(args)?;
    Some(CommandSpec::new(
        format!("su - {user}"),
        format!("Switches to user {user}"),
    ))
}

fn kill_process(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let pid = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo kill {pid}"),
        format!("Kills process {pid}"),
    ))
}

fn kill_by_name(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let name = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo pkill {name}"),
        format!("Kills processes named {name}"),
    ))
}

fn find_process(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let name = first_token(args)?;
    Some(CommandSpec::new(
        format!("ps aux | grep {name}"),
        format!("Finds processes matching {name}"),
    ))
}

fn show_disk_usage_for(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let dir = first_token(args)?;
    Some(CommandSpec::new(
        format!("du -sh {dir}/*"),
        format!("Shows sizes in {dir}"),
    ))
}

fn test_connection(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let host = first_token(args)?;
    Some(CommandSpec::new(format!("ping -c 4 {host}"), format!("Pings {host}")))
}

fn trace_route(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let host = first_token(args)?;
    Some(CommandSpec::new(
        format!("traceroute {host}"),
        format!("Traces route to {host}"),
    ))
}

fn check_port(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let mut parts = args.split_whitespace();
    let host = parts.next()?;
    let port = parts.next()?;
    Some(CommandSpec::new(
        format!("nc -zv {host} {port}"),
        "Checks if port is open",
    ))
}

fn make_owner(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let mut parts = args.split_whitespace();
    let user = parts.next()?;
    let file = parts.collect::<Vec<_>>().join(" ");
    if file.is_empty() {
        return None;
    }
    Some(CommandSpec::new(
        format!("sudo chown {user}:{user} {file}"),
        format!("Makes {user} owner of {file}"),
    ))
}

fn make_readable(file: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(format!("chmod +r {file}"), "Adds read permission"))
}

fn make_writable(file: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(format!("chmod +w {file}"), "Adds write permission"))
}

fn make_executable(file: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(format!("chmod +x {file}"), "Adds execute permission"))
}

pub static HELP: HelpTable = HelpTable {
    title: "LINUX SYSTEM COMMANDS (Ubuntu/Debian)",
    sections: &[
        HelpSection {
            key: "info",
            title: "SYSTEM INFO",
            rows: &[
                ["system show system info", "hostnamectl", "Shows OS and system info"],
                ["system show uptime", "uptime -p", "Shows how long running"],
                ["system show memory", "free -h", "Shows RAM usage"],
                ["system show disk", "df -h", "Shows disk space"],
                ["system show disk usage", "du -sh * | sort -hr", "Shows folder sizes"],
                ["system show cpu", "lscpu", "Shows CPU info"],
                ["system show ip", "ip addr show", "Shows IP addresses"],
                ["system show public ip", "curl ifconfig.me", "Shows public IP"],
            ],
        },
        HelpSection {
            key: "packages",
            title: "PACKAGES (APT)",
            rows: &[
                ["system update packages", "apt update", "Updates package list"],
                ["system upgrade packages", "apt upgrade -y", "Upgrades all packages"],
                ["system install nginx", "apt install -y nginx", "Installs a package"],
                ["system remove nginx", "apt remove -y nginx", "Removes a package"],
                ["system search package node", "apt search node", "Searches for packages"],
                ["system show installed", "apt list --installed", "Lists installed"],
                ["system clean packages", "apt autoremove...", "Removes unused"],
            ],
        },
        HelpSection {
            key: "services",
            title: "SERVICES (systemctl)",
            rows: &[
                ["system show services", "systemctl list-units...", "Lists running services"],
                ["system service status nginx", "systemctl status nginx", "Shows service status"],
                ["system service start nginx", "systemctl start nginx", "Starts a service"],
                ["system service stop nginx", "systemctl stop nginx", "Stops a service"],
                ["system service restart nginx", "systemctl restart nginx", "Restarts a service"],
                ["system service enable nginx", "systemctl enable nginx", "Enables on boot"],
                ["system service logs nginx", "journalctl -u nginx -f", "Shows logs (live)"],
            ],
        },
        HelpSection {
            key: "firewall",
            title: "FIREWALL (UFW)",
            rows: &[
                ["system firewall status", "ufw status verbose", "Shows firewall status"],
                ["system firewall enable", "ufw enable", "Enables firewall"],
                ["system firewall allow 80", "ufw allow 80", "Allows port 80"],
                ["system firewall allow 443", "ufw allow 443", "Allows HTTPS"],
                ["system firewall deny 23", "ufw deny 23", "Denies port 23"],
                ["system firewall allow from 1.2.3.4", "ufw allow from 1.2.3.4", "Allows IP"],
                ["system firewall show rules", "ufw status numbered", "Shows numbered rules"],
                ["system firewall delete rule 3", "ufw delete 3", "Deletes rule #3"],
            ],
        },
        HelpSection {
            key: "users",
            title: "USER MANAGEMENT",
            rows: &[
                ["system show users", "who", "Shows logged in users"],
                ["system create user john", "adduser john", "Creates new user"],
                ["system delete user john", "deluser john", "Deletes user"],
                ["system add to sudo john", "usermod -aG sudo john", "Gives sudo access"],
                ["system add to group john docker", "usermod -aG docker john", "Adds to group"],
                ["system show sudo users", "getent group sudo", "Lists sudo users"],
            ],
        },
        HelpSection {
            key: "processes",
            title: "PROCESSES",
            rows: &[
                ["system show processes", "ps aux", "Shows all processes"],
                ["system show top processes", "ps aux --sort=-%mem", "Top memory users"],
                ["system find process nginx", "ps aux | grep nginx", "Finds processes"],
                ["system kill process 1234", "kill 1234", "Kills by PID"],
                ["system kill by name nginx", "pkill nginx", "Kills by name"],
            ],
        },
        HelpSection {
            key: "logs",
            title: "LOGS",
            rows: &[
                ["system show system logs", "journalctl -xe", "Recent system logs"],
                ["system show auth logs", "tail /var/log/auth.log", "Auth/login logs"],
                ["system show ssh attempts", "grep Failed auth.log", "Failed SSH logins"],
                ["system show last logins", "last -20", "Recent logins"],
            ],
        },
        HelpSection {
            key: "network",
            title: "NETWORK",
            rows: &[
                ["system test connection google.com", "ping -c 4 google.com", "Pings host"],
                ["system trace route google.com", "traceroute google.com", "Traces route"],
                ["system check port host.com 443", "nc -zv host.com 443", "Checks if port open"],
                ["system show dns", "cat /etc/resolv.conf", "Shows DNS servers"],
            ],
        },
        HelpSection {
            key: "permissions",
            title: "PERMISSIONS",
            rows: &[
                ["system make owner john /var/www", "chown john:john /var/www", "Changes owner"],
                ["system make executable script.sh", "chmod +x script.sh", "Makes executable"],
            ],
        },
    ],
    tips: &[
        "  COMMON INITIAL SERVER SETUP:",
        "  -----------------------------------------------------------------",
        "  1. system update and upgrade           # Update system",
        "  2. system firewall enable              # Enable firewall",
        "  3. system firewall allow 22            # Allow SSH",
        "  4. system firewall allow 80            # Allow HTTP",
        "  5. system firewall allow 443           # Allow HTTPS",
        "  6. system create user deploy           # Create deploy user",
        "  7. system add to sudo deploy           # Give sudo access",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pattern::Resolution;

    fn dispatch(input: &str) -> Resolution {
        let mut r = Registry::new();
        register(&mut r);
        r.finalize();
        r.dispatch(None, input, Platform::Unix)
    }

    fn cmd(input: &str) -> String {
        match dispatch(input) {
            Resolution::Run(spec) => spec.cmd,
            other => panic!("{input:?}: {other:?}"),
        }
    }

    #[test]
    fn firewall_patterns_pick_the_most_specific_form() {
        assert_eq!(cmd("firewall allow 80"), "sudo ufw allow 80");
        assert_eq!(cmd("firewall allow from 1.2.3.4"), "sudo ufw allow from 1.2.3.4");
        assert_eq!(
            cmd("firewall allow ssh from 1.2.3.4"),
            "sudo ufw allow from 1.2.3.4 to any port 22"
        );
        assert_eq!(cmd("firewall deny 23"), "sudo ufw deny 23");
        assert_eq!(cmd("firewall delete rule 3"), "sudo ufw delete 3");
    }

    #[test]
    fn firewall_exacts_beat_argument_patterns() {
        assert_eq!(cmd("firewall status"), "sudo ufw status verbose");
        assert_eq!(cmd("firewall show rules"), "sudo ufw status numbered");
    }

    #[test]
    fn service_family() {
        assert_eq!(cmd("service status nginx"), "sudo systemctl status nginx");
        assert_eq!(cmd("service restart nginx"), "sudo systemctl restart nginx");
        assert_eq!(cmd("service logs nginx"), "sudo journalctl -u nginx -f");
    }

    #[test]
    fn package_family_joins_multiple_names() {
        assert_eq!(cmd("install nginx certbot"), "sudo apt install -y nginx certbot");
        assert_eq!(cmd("purge nginx"), "sudo apt purge -y nginx");
        assert_eq!(cmd("search package node"), "apt search node");
    }

    #[test]
    fn user_and_group_management() {
        assert_eq!(cmd("create user deploy"), "sudo adduser deploy");
        assert_eq!(cmd("add to sudo deploy"), "sudo usermod -aG sudo deploy");
        assert_eq!(cmd("add to group deploy docker"), "sudo usermod -aG docker deploy");
        assert_eq!(dispatch("add to group deploy"), Resolution::NotFound);
    }

    #[test]
    fn network_checks() {
        assert_eq!(cmd("test connection google.com"), "ping -c 4 google.com");
        assert_eq!(cmd("check port host.com 443"), "nc -zv host.com 443");
        assert_eq!(dispatch("check port host.com"), Resolution::NotFound);
    }

    #[test]
    fn ownership_takes_user_then_path() {
        assert_eq!(
            cmd("make owner john /var/www/html"),
            "sudo chown john:john /var/www/html"
        );
        assert_eq!(dispatch("make owner john"), Resolution::NotFound);
    }
}
