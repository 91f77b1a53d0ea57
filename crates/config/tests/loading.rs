use figment::Jail;
use site_config::{ConfigLoader, RawSiteConfig, SiteConfig};
use site_types::{ConfigError, SearchEngine};
use std::sync::Arc;

const SITE_YAML: &str = r#"
rootPath: ""
port: 8080
domain: "dubbo.apache.org"
defaultSearchEngine: "google"
defaultLanguage: "zh-cn"
locales:
  en-us:
    pageMenu:
      - key: "home"
        text: "BLOG"
        link: "/en-us/blog/index.html"
    documentation:
      title: "Documentation"
      list:
        - text: "Overview"
          link: "/en-us/docs/demo1.html"
    resources:
      title: "Resources"
      list:
        - text: "Blog"
          link: "/en-us/blog/index.html"
    copyright: "Copyright © 2019 klw8.top"
  zh-cn:
    pageMenu:
      - key: "home"
        text: "博客"
        link: "/zh-cn/blog/index.html"
    documentation:
      title: "文档"
      list:
        - text: "概览"
          link: "/zh-cn/docs/demo1.html"
    resources:
      title: "资源"
      list:
        - text: "博客"
          link: "/zh-cn/blog/index.html"
    copyright: "Copyright © 2019 klw8.top"
"#;

#[test]
fn loads_yaml_file() {
    Jail::expect_with(|jail| {
        jail.create_file("site.yaml", SITE_YAML)?;

        let config = ConfigLoader::load("site.yaml").map_err(|e| e.to_string())?;
        assert_eq!(config.port(), 8080);
        assert_eq!(config.default_search_engine(), SearchEngine::Google);
        assert_eq!(
            config.get("zh-cn").map_err(|e| e.to_string())?.copyright,
            "Copyright © 2019 klw8.top"
        );
        Ok(())
    });
}

#[test]
fn loads_json_file() {
    Jail::expect_with(|jail| {
        let json = serde_json::to_string_pretty(&RawSiteConfig::default())
            .map_err(|e| e.to_string())?;
        jail.create_file("site.json", &json)?;

        let config = ConfigLoader::load("site.json").map_err(|e| e.to_string())?;
        let embedded = ConfigLoader::embedded().map_err(|e| e.to_string())?;
        assert_eq!(config, embedded);
        Ok(())
    });
}

#[test]
fn environment_overrides_port_and_domain() {
    Jail::expect_with(|jail| {
        jail.create_file("site.yaml", SITE_YAML)?;
        jail.set_env("SITE_PORT", "9000");
        jail.set_env("SITE_DOMAIN", "docs.example.org");
        // Only port and domain are overridable
        jail.set_env("SITE_ROOTPATH", "/ignored");

        let config = ConfigLoader::load("site.yaml").map_err(|e| e.to_string())?;
        assert_eq!(config.port(), 9000);
        assert_eq!(config.domain(), "docs.example.org");
        assert_eq!(config.root_path(), "");
        Ok(())
    });
}

#[test]
fn environment_override_is_validated() {
    Jail::expect_with(|jail| {
        jail.create_file("site.yaml", SITE_YAML)?;
        jail.set_env("SITE_PORT", "70000");

        let err = ConfigLoader::load("site.yaml").unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort { value: 70000 });
        Ok(())
    });
}

#[test]
fn negative_environment_port_is_validated() {
    Jail::expect_with(|jail| {
        jail.create_file("site.yaml", SITE_YAML)?;
        jail.set_env("SITE_PORT", "-1");

        let err = ConfigLoader::load("site.yaml").unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort { value: -1 });
        Ok(())
    });
}

#[test]
fn reports_every_failure_in_one_load() {
    let yaml = SITE_YAML
        .replace("rootPath: \"\"", "rootPath: \"/foo/\"")
        .replace("defaultSearchEngine: \"google\"", "defaultSearchEngine: \"yahoo\"")
        .replace("link: \"/zh-cn/docs/demo1.html\"", "link: \"zh-cn/docs/demo1.html\"");

    let err = ConfigLoader::load_from_str(&yaml).unwrap_err();
    let failures: Vec<_> = err.iter().collect();
    assert_eq!(failures.len(), 3);
    assert!(failures
        .iter()
        .any(|e| matches!(e, ConfigError::InvalidRootPath { value } if value == "/foo/")));
    assert!(failures
        .iter()
        .any(|e| matches!(e, ConfigError::InvalidSearchEngine { value } if value == "yahoo")));
    assert!(failures.iter().any(|e| matches!(
        e,
        ConfigError::InvalidLocaleContent { locale, field, .. }
            if locale == "zh-cn" && field == "documentation.list[0].link"
    )));
}

#[test]
fn rejects_duplicate_menu_keys() {
    let yaml = SITE_YAML.replace(
        "      - key: \"home\"\n        text: \"BLOG\"\n        link: \"/en-us/blog/index.html\"\n",
        "      - key: \"home\"\n        text: \"BLOG\"\n        link: \"/en-us/blog/index.html\"\n      - key: \"home\"\n        text: \"DOCS\"\n        link: \"/en-us/docs/demo1.html\"\n",
    );

    let err = ConfigLoader::load_from_str(&yaml).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidLocaleContent { ref locale, ref field, .. }
            if locale == "en-us" && field == "pageMenu[1].key"
    ));
}

#[test]
fn yaml_round_trip_is_identical() {
    let config = ConfigLoader::load_from_str(SITE_YAML).unwrap();
    let yaml = serde_yaml::to_string(&config).unwrap();
    let reloaded = ConfigLoader::load_from_str(&yaml).unwrap();
    assert_eq!(config, reloaded);

    let direct: SiteConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(config, direct);
}

#[tokio::test]
async fn shared_by_concurrent_readers() {
    let config = Arc::new(ConfigLoader::load_from_str(SITE_YAML).unwrap());

    let mut handles = Vec::new();
    for i in 0..16 {
        let config = Arc::clone(&config);
        handles.push(tokio::spawn(async move {
            let locale = if i % 2 == 0 { "en-us" } else { "zh-cn" };
            let content = config.get(locale).unwrap();
            (locale, content.page_menu[0].link.clone())
        }));
    }

    for handle in handles {
        let (locale, link) = handle.await.unwrap();
        assert!(link.starts_with(&format!("/{}/", locale)));
    }

    let threads: Vec<_> = (0..4)
        .map(|_| {
            let config = Arc::clone(&config);
            std::thread::spawn(move || config.default_content().copyright.clone())
        })
        .collect();
    for thread in threads {
        assert_eq!(thread.join().unwrap(), "Copyright © 2019 klw8.top");
    }
}
