use crate::{
    core::{
        exec::Platform,
        pattern::{CommandSpec, Registry},
    },
    help::{HelpSection, HelpTable},
};

pub fn register(r: &mut Registry) {
    // nginx
    r.exact("nginx status", "sudo systemctl status nginx", "Shows nginx service status");
    r.exact("nginx start", "sudo systemctl start nginx", "Starts nginx server");
    r.exact("nginx stop", "sudo systemctl stop nginx", "Stops nginx server");
    r.exact("nginx restart", "sudo systemctl restart nginx", "Restarts nginx server");
    r.exact("nginx reload", "sudo systemctl reload nginx", "Reloads nginx config without downtime");
    r.exact("nginx test config", "sudo nginx -t", "Tests nginx configuration for errors");
    r.exact("nginx show config", "cat /etc/nginx/nginx.conf", "Shows main nginx config");
    r.exact("nginx show sites", "ls -la /etc/nginx/sites-enabled/", "Lists enabled sites");
    r.exact("nginx show available", "ls -la /etc/nginx/sites-available/", "Lists available sites");
    r.exact("nginx show logs", "sudo tail -f /var/log/nginx/access.log", "Shows access logs (live)");
    r.exact("nginx show errors", "sudo tail -f /var/log/nginx/error.log", "Shows error logs (live)");

    // apache
    r.exact("apache status", "sudo systemctl status apache2", "Shows Apache service status");
    r.exact("apache start", "sudo systemctl start apache2", "Starts Apache server");
    r.exact("apache stop", "sudo systemctl stop apache2", "Stops Apache server");
    r.exact("apache restart", "sudo systemctl restart apache2", "Restarts Apache server");
    r.exact("apache reload", "sudo systemctl reload apache2", "Reloads Apache config");
    r.exact("apache test config", "sudo apachectl configtest", "Tests Apache configuration");
    r.exact("apache show sites", "ls -la /etc/apache2/sites-enabled/", "Lists enabled sites");
    r.exact("apache show modules", "apache2ctl -M", "Lists loaded modules");
    r.exact("apache show logs", "sudo tail -f /var/log/apache2/access.log", "Shows access logs");
    r.exact("apache show errors", "sudo tail -f /var/log/apache2/error.log", "Shows error logs");

    // ssl / certbot
    r.exact("ssl show certificates", "sudo certbot certificates", "Lists all SSL certificates");
    r.exact("ssl renew all", "sudo certbot renew", "Renews all certificates");
    r.exact("ssl renew dry run", "sudo certbot renew --dry-run", "Tests renewal without changes");
    r.exact(
        "ssl show expiry",
        "sudo certbot certificates 2>/dev/null | grep -E '(Certificate Name|Expiry)'",
        "Shows certificate expiry dates",
    );

    // ports
    r.exact("show open ports", "sudo netstat -tlnp", "Shows all listening ports");
    r.exact("show connections", "sudo netstat -anp | head -50", "Shows active connections");
    r.exact("show port usage", "sudo lsof -i -P -n | head -30", "Shows what is using ports");

    r.arg("nginx enable site", nginx_enable_site);
    r.arg("nginx disable site", nginx_disable_site);
    r.arg("nginx edit site", nginx_edit_site);
    r.arg("nginx create site", nginx_create_site);
    r.arg("nginx proxy", nginx_proxy);
    r.arg("apache enable site", apache_enable_site);
    r.arg("apache disable site", apache_disable_site);
    r.arg("apache enable module", apache_enable_module);
    r.arg("apache disable module", apache_disable_module);
    r.arg("ssl get certificate apache", ssl_get_certificate_apache);
    r.arg("ssl get certificate standalone", ssl_get_certificate_standalone);
    r.arg("ssl get certificate", ssl_get_certificate);
    r.arg("ssl delete certificate", ssl_delete_certificate);
    r.arg("show port", show_port);
    r.arg("kill port", kill_port);
}

fn first_token(args: &str) -> Option<&str> {
    args.split_whitespace().next()
}

fn nginx_enable_site(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let site = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo ln -s /etc/nginx/sites-available/{site} /etc/nginx/sites-enabled/{site}"),
        "Enables a site",
    ))
}

fn nginx_disable_site(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let site = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo rm /etc/nginx/sites-enabled/{site}"),
        "Disables a site",
    ))
}

fn nginx_edit_site(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let site = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo ${{EDITOR:-nano}} /etc/nginx/sites-available/{site}"),
        "Edit site config",
    ))
}

fn nginx_create_site(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let site = first_token(args)?;
    Some(CommandSpec::new(
        format!(
            "sudo cp /etc/nginx/sites-available/default /etc/nginx/sites-available/{site} && sudo ${{EDITOR:-nano}} /etc/nginx/sites-available/{site}"
        ),
        "Creates new site from template",
    ))
}

/// Emits a full reverse-proxy server block and pipes it through
/// `sudo tee` into sites-available.
fn nginx_proxy(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let mut parts = args.split_whitespace();
    let domain = parts.next()?;
    let port = parts.next()?;
    let config = format!(
        "server {{
    listen 80;
    server_name {domain};

    location / {{
        proxy_pass http://localhost:{port};
        proxy_http_version 1.1;
        proxy_set_header Upgrade $http_upgrade;
        proxy_set_header Connection 'upgrade';
        proxy_set_header Host $host;
        proxy_set_header X-Real-IP $remote_addr;
        proxy_set_header X-Forwarded-For $proxy_add_x_forwarded_for;
        proxy_set_header X-Forwarded-Proto $scheme;
        proxy_cache_bypass $http_upgrade;
    }}
}}"
    );
    Some(CommandSpec::new(
        format!("echo '{config}' | sudo tee /etc/nginx/sites-available/{domain}"),
        "Creates reverse proxy config",
    ))
}

fn apache_enable_site(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let site = first_token(args)?;
    Some(CommandSpec::new(format!("sudo a2ensite {site}"), "Enables a site"))
}

fn apache_disable_site(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let site = first_token(args)?;
    Some(CommandSpec::new(format!("sudo a2dissite {site}"), "Disables a site"))
}

fn apache_enable_module(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let module = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo a2enmod {module}"),
        "Enables Apache module",
    ))
}

fn apache_disable_module(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let module = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo a2dismod {module}"),
        "Disables Apache module",
    ))
}

fn ssl_get_certificate(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let domain = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo certbot --nginx -d {domain}"),
        "Gets SSL cert for domain (nginx)",
    ))
}

fn ssl_get_certificate_apache(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let domain = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo certbot --apache -d {domain}"),
        "Gets SSL cert for domain (apache)",
    ))
}

fn ssl_get_certificate_standalone(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let domain = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo certbot certonly --standalone -d {domain}"),
        "Gets SSL cert (standalone)",
    ))
}

fn ssl_delete_certificate(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let domain = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo certbot delete --cert-name {domain}"),
        "Deletes a certificate",
    ))
}

fn show_port(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let port = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo lsof -i :{port}"),
        format!("Shows what's using port {port}"),
    ))
}

fn kill_port(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let port = first_token(args)?;
    Some(CommandSpec::new(
        format!("sudo fuser -k {port}/tcp"),
        format!("Kills process on port {port}"),
    ))
}

pub static HELP: HelpTable = HelpTable {
    title: "WEB SERVER COMMANDS (NGINX / APACHE / SSL)",
    sections: &[
        HelpSection {
            key: "nginx",
            title: "NGINX - Basic",
            rows: &[
                ["server nginx status", "systemctl status nginx", "Shows nginx status"],
                ["server nginx start", "systemctl start nginx", "Starts nginx"],
                ["server nginx stop", "systemctl stop nginx", "Stops nginx"],
                ["server nginx restart", "systemctl restart nginx", "Restarts nginx"],
                ["server nginx reload", "systemctl reload nginx", "Reloads config (no downtime)"],
                ["server nginx test config", "nginx -t", "Tests configuration"],
            ],
        },
        HelpSection {
            key: "sites",
            title: "NGINX - Sites",
            rows: &[
                ["server nginx show sites", "ls sites-enabled/", "Lists enabled sites"],
                ["server nginx enable site mysite", "ln -s ...", "Enables a site"],
                ["server nginx disable site mysite", "rm sites-enabled/...", "Disables a site"],
                ["server nginx edit site mysite", "nano sites-available/...", "Edit site config"],
                ["server nginx create site mysite", "cp default ...", "Creates from template"],
            ],
        },
        HelpSection {
            key: "proxy",
            title: "NGINX - Reverse Proxy",
            rows: &[["server nginx proxy domain.com 3000", "Creates config file", "Sets up reverse proxy"]],
        },
        HelpSection {
            key: "logs",
            title: "NGINX - Logs",
            rows: &[
                ["server nginx show logs", "tail -f access.log", "Shows access logs (live)"],
                ["server nginx show errors", "tail -f error.log", "Shows error logs (live)"],
            ],
        },
        HelpSection {
            key: "apache",
            title: "APACHE - Basic",
            rows: &[
                ["server apache status", "systemctl status apache2", "Shows Apache status"],
                ["server apache start", "systemctl start apache2", "Starts Apache"],
                ["server apache stop", "systemctl stop apache2", "Stops Apache"],
                ["server apache restart", "systemctl restart apache2", "Restarts Apache"],
                ["server apache test config", "apachectl configtest", "Tests configuration"],
            ],
        },
        HelpSection {
            key: "modules",
            title: "APACHE - Sites & Modules",
            rows: &[
                ["server apache enable site mysite", "a2ensite mysite", "Enables a site"],
                ["server apache disable site mysite", "a2dissite mysite", "Disables a site"],
                ["server apache enable module ssl", "a2enmod ssl", "Enables a module"],
                ["server apache show modules", "apache2ctl -M", "Lists loaded modules"],
            ],
        },
        HelpSection {
            key: "ssl",
            title: "SSL/HTTPS (Certbot)",
            rows: &[
                ["server ssl show certificates", "certbot certificates", "Lists all certificates"],
                ["server ssl get certificate domain.com", "certbot --nginx -d ...", "Gets SSL cert (nginx)"],
                ["server ssl get certificate apache domain.com", "certbot --apache -d ...", "Gets SSL cert (apache)"],
                ["server ssl renew all", "certbot renew", "Renews all certificates"],
                ["server ssl renew dry run", "certbot renew --dry-run", "Tests renewal"],
                ["server ssl show expiry", "certbot certificates...", "Shows expiry dates"],
            ],
        },
        HelpSection {
            key: "ports",
            title: "PORTS & CONNECTIONS",
            rows: &[
                ["server show open ports", "netstat -tlnp", "Shows listening ports"],
                ["server show port 3000", "lsof -i :3000", "Shows what uses port"],
                ["server kill port 3000", "fuser -k 3000/tcp", "Kills process on port"],
                ["server show connections", "netstat -anp", "Shows active connections"],
            ],
        },
    ],
    tips: &[
        "  REVERSE PROXY QUICK SETUP:",
        "  -----------------------------------------------------------------",
        "  1. server nginx proxy myapp.com 3000    # Creates config",
        "  2. server nginx enable site myapp.com   # Enables the site",
        "  3. server nginx test config             # Tests for errors",
        "  4. server nginx reload                  # Apply changes",
        "  5. server ssl get certificate myapp.com # Add HTTPS",
        "",
        "  COMMON CONFIG LOCATIONS:",
        "  -----------------------------------------------------------------",
        "  Nginx main config:     /etc/nginx/nginx.conf",
        "  Nginx sites:           /etc/nginx/sites-available/",
        "  Apache main config:    /etc/apache2/apache2.conf",
        "  Apache sites:          /etc/apache2/sites-available/",
        "  SSL certificates:      /etc/letsencrypt/live/",
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
    fn nginx_site_management() {
        assert_eq!(
            cmd("nginx enable site myapp.com"),
            "sudo ln -s /etc/nginx/sites-available/myapp.com /etc/nginx/sites-enabled/myapp.com"
        );
        assert_eq!(
            cmd("nginx disable site myapp.com"),
            "sudo rm /etc/nginx/sites-enabled/myapp.com"
        );
    }

    #[test]
    fn nginx_proxy_renders_a_server_block() {
        let cmd = cmd("nginx proxy myapp.com 3000");
        assert!(cmd.starts_with("echo 'server {"));
        assert!(cmd.contains("server_name myapp.com;"));
        assert!(cmd.contains("proxy_pass http://localhost:3000;"));
        assert!(cmd.ends_with("| sudo tee /etc/nginx/sites-available/myapp.com"));
    }

    #[test]
    fn nginx_proxy_requires_domain_and_port() {
        assert_eq!(dispatch("nginx proxy myapp.com"), Resolution::NotFound);
    }

    #[test]
    fn ssl_certificate_variants_pick_the_most_specific_pattern() {
        assert_eq!(
            cmd("ssl get certificate myapp.com"),
            "sudo certbot --nginx -d myapp.com"
        );
        assert_eq!(
            cmd("ssl get certificate apache myapp.com"),
            "sudo certbot --apache -d myapp.com"
        );
        assert_eq!(
            cmd("ssl get certificate standalone myapp.com"),
            "sudo certbot certonly --standalone -d myapp.com"
        );
    }

    #[test]
    fn port_helpers() {
        assert_eq!(cmd("show port 3000"), "sudo lsof -i :3000");
        assert_eq!(cmd("kill port 3000"), "sudo fuser -k 3000/tcp");
        assert_eq!(cmd("show open ports"), "sudo netstat -tlnp");
    }
}
