//! Pattern and keyword tables for entity extraction.
//!
//! Immutable configuration built once at startup and injected into the
//! extractor. Nothing here is a process-wide static.

use std::collections::HashSet;

use regex::Regex;

use lattice_core::models::EntityType;

/// Stop words skipped by the generic token pass.
const STOP_WORDS: &[&str] = &[
    // English
    "the", "a", "an", "and", "or", "but", "if", "then", "else", "when", "what", "which", "who",
    "how", "why", "where", "is", "are", "was", "were", "be", "been", "do", "does", "did", "can",
    "could", "will", "would", "should", "may", "might", "must", "have", "has", "had", "of", "to",
    "in", "on", "at", "by", "for", "with", "about", "into", "from", "this", "that", "these",
    "those", "it", "its", "not", "no", "yes", "please", "me", "my", "we", "our", "you", "your",
    // Chinese function words
    "的", "了", "和", "与", "或", "在", "是", "有", "我", "你", "他", "她", "它", "们", "这",
    "那", "什么", "怎么", "如何", "为什么", "哪里", "哪个", "一个", "一些", "可以", "需要",
    "进行", "使用", "请问", "帮我", "关于",
];

/// Fixed technical vocabulary accepted by the generic pass regardless of
/// casing or script.
const TECHNICAL_KEYWORDS: &[&str] = &[
    "redis", "mysql", "postgresql", "mongodb", "elasticsearch", "kafka", "rabbitmq", "nginx",
    "docker", "kubernetes", "k8s", "linux", "git", "jenkins", "prometheus", "grafana", "spark",
    "hadoop", "flink", "hive", "etcd", "consul", "zookeeper", "grpc", "http", "https", "tcp",
    "udp", "dns", "ssl", "tls", "api", "rest", "graphql", "oauth", "jwt", "sql", "nosql",
    "java", "python", "rust", "golang", "javascript", "typescript", "node", "react", "vue",
    "spring", "django", "flask", "tomcat", "maven", "gradle", "npm", "webpack", "vite",
    "微服务", "分布式", "高可用", "负载均衡", "消息队列", "缓存", "数据库", "容器", "集群",
    "索引", "事务", "分片", "主从", "哨兵", "持久化", "限流", "熔断", "网关",
];

/// One label-specific pattern with the confidence assigned to its matches.
pub struct EntityPattern {
    pub entity_type: EntityType,
    pub regex: Regex,
    pub confidence: f64,
}

/// All static extraction configuration: stop words, technical vocabulary,
/// per-label patterns, and the generic-pass run matchers.
pub struct ExtractionTables {
    stop_words: HashSet<&'static str>,
    technical_keywords: HashSet<&'static str>,
    patterns: Vec<EntityPattern>,
    cjk_run: Regex,
    capitalized_run: Regex,
    token_split: Regex,
}

impl ExtractionTables {
    /// Build the default tables. Regex compilation of the built-in patterns
    /// cannot fail, so this is infallible.
    pub fn new() -> Self {
        let patterns = vec![
            // PERSON: honorific + Latin name, or CJK name followed by a title.
            EntityPattern {
                entity_type: EntityType::Person,
                regex: Regex::new(
                    r"(?:Mr|Mrs|Ms|Dr|Prof)\.?\s+[A-Z][a-z]{1,14}|[\u{4e00}-\u{9fff}]{2,4}(?:先生|女士|老师|教授|博士|工程师)",
                )
                .expect("person pattern"),
                confidence: 0.85,
            },
            // ORGANIZATION: corporate/institutional suffixes, Latin or CJK.
            EntityPattern {
                entity_type: EntityType::Organization,
                regex: Regex::new(
                    r"[A-Z][A-Za-z0-9]{1,20}\s+(?:Inc|Corp|Ltd|LLC|GmbH|University|Institute)\.?|[\u{4e00}-\u{9fff}]{2,8}(?:公司|集团|银行|大学|学院|研究院|实验室)",
                )
                .expect("organization pattern"),
                confidence: 0.8,
            },
            // TECHNOLOGY: versioned product names and stack phrases.
            EntityPattern {
                entity_type: EntityType::Technology,
                regex: Regex::new(
                    r"(?i)\b(?:redis|mysql|postgresql|mongodb|elasticsearch|kafka|rabbitmq|nginx|docker|kubernetes|spring\s*(?:boot|cloud)?|react|vue)(?:\s*\d+(?:\.\d+)*)?\b",
                )
                .expect("technology pattern"),
                confidence: 0.9,
            },
            // CONCEPT: CJK domain terms and English "<X> pattern/architecture".
            EntityPattern {
                entity_type: EntityType::Concept,
                regex: Regex::new(
                    r"[\u{4e00}-\u{9fff}]{2,6}(?:架构|算法|模型|系统|服务|机制|策略|协议|方案)|\b[a-z]+(?:\s[a-z]+)?\s(?:pattern|architecture|algorithm|protocol)\b",
                )
                .expect("concept pattern"),
                confidence: 0.75,
            },
        ];

        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            technical_keywords: TECHNICAL_KEYWORDS.iter().copied().collect(),
            patterns,
            cjk_run: Regex::new(r"^[\u{4e00}-\u{9fff}]{2,8}$").expect("cjk run"),
            capitalized_run: Regex::new(r"^[A-Z][A-Za-z]{1,14}$").expect("capitalized run"),
            token_split: Regex::new(r"[\s\p{P}\p{S}]+").expect("token split"),
        }
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token.to_lowercase().as_str())
            || self.stop_words.contains(token)
    }

    pub fn is_technical_keyword(&self, token: &str) -> bool {
        self.technical_keywords
            .contains(token.to_lowercase().as_str())
            || self.technical_keywords.contains(token)
    }

    pub fn is_cjk_run(&self, token: &str) -> bool {
        self.cjk_run.is_match(token)
    }

    pub fn is_capitalized_run(&self, token: &str) -> bool {
        self.capitalized_run.is_match(token)
    }

    pub fn patterns(&self) -> &[EntityPattern] {
        &self.patterns
    }

    /// Split text into generic-pass tokens on whitespace and punctuation.
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<(usize, &'t str)> {
        let mut tokens = Vec::new();
        let mut cursor = 0;
        for sep in self.token_split.find_iter(text) {
            if sep.start() > cursor {
                tokens.push((cursor, &text[cursor..sep.start()]));
            }
            cursor = sep.end();
        }
        if cursor < text.len() {
            tokens.push((cursor, &text[cursor..]));
        }
        tokens
    }
}

impl Default for ExtractionTables {
    fn default() -> Self {
        Self::new()
    }
}
