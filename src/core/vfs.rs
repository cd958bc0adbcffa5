//! A read-only directory tree over the profile, for `ls`, `cd` and `cat`.

use crate::core::profile::Profile;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    File(String),
    Dir(Vec<(String, Node)>),
}

impl Node {
    fn child(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Dir(children) => children.iter().find(|(n, _)| n == name).map(|(_, node)| node),
            Node::File(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    root: Node,
}

impl Tree {
    pub fn from_profile(profile: &Profile) -> Self {
        let projects = profile
            .projects
            .iter()
            .map(|p| (p.name.clone(), Node::File(p.description.clone())))
            .collect();
        Self {
            root: Node::Dir(vec![
                ("about".to_string(), Node::File(profile.bio.clone())),
                ("projects".to_string(), Node::Dir(projects)),
                ("contact".to_string(), Node::File(profile.email.clone())),
            ]),
        }
    }

    fn node_at(&self, path: &[String]) -> Option<&Node> {
        path.iter().try_fold(&self.root, |node, seg| node.child(seg))
    }

    pub fn ls(&self, cwd: &[String]) -> String {
        match self.node_at(cwd) {
            Some(Node::Dir(children)) => children
                .iter()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>()
                .join("  "),
            _ => String::new(),
        }
    }

    /// Returns the new working directory, or the message to print.
    pub fn cd(&self, cwd: &[String], args: &[&str]) -> Result<Vec<String>, String> {
        let Some(&dir) = args.first() else {
            return Err("cd: missing argument".to_string());
        };
        match dir {
            "~" | "/" => Ok(Vec::new()),
            ".." => Ok(cwd[..cwd.len().saturating_sub(1)].to_vec()),
            "." => Ok(cwd.to_vec()),
            _ => match self.node_at(cwd).and_then(|n| n.child(dir)) {
                Some(Node::Dir(_)) => {
                    let mut next = cwd.to_vec();
                    next.push(dir.to_string());
                    Ok(next)
                }
                _ => Err(format!("cd: no such directory: {}", dir)),
            },
        }
    }

    pub fn cat(&self, cwd: &[String], args: &[&str]) -> String {
        let Some(&file) = args.first() else {
            return "cat: missing argument".to_string();
        };
        match self.node_at(cwd).and_then(|n| n.child(file)) {
            Some(Node::File(contents)) => contents.clone(),
            _ => format!("cat: no such file: {}", file),
        }
    }
}

pub fn display_path(cwd: &[String]) -> String {
    if cwd.is_empty() {
        "~".to_string()
    } else {
        format!("~/{}", cwd.join("/"))
    }
}
