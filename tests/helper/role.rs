//! Temporary Ansible role checkouts

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const README: &str = "Ansible Role: Go
================

Example Playbook
----------------

```yaml
- hosts: servers
  roles:
    - role: gantsign.golang
      golang_gopath: '$HOME/workspace-go'
```

Role Variables
--------------

```yaml
golang_version: '1.20.1'
```

Supported Go Versions
---------------------

* `1.20.1`
* `1.20.0`
* `1.19.0`

License
-------

MIT
";

pub const DEFAULTS: &str = "---
# Go language SDK version number
golang_version: '1.20.1'

# Mirror to download the Go language SDK redistributable package from
golang_mirror: 'https://storage.googleapis.com/golang'

# Base installation directory the Go language SDK distribution
golang_install_dir: '/opt/go/{{ golang_version }}'
";

pub const TEST_FIXTURE: &str = "import os
import pytest
import re

import testinfra.utils.ansible_runner

testinfra_hosts = testinfra.utils.ansible_runner.AnsibleRunner(
    os.environ['MOLECULE_INVENTORY_FILE']).get_hosts('all')


@pytest.mark.parametrize('name,pattern', [
    ('GOROOT', '^/opt/go/1.10.2$'),
    ('GOPATH', '^/root/workspace-go$'),
    ('PATH', '^(.+:)?/opt/go/1.10.2/bin(:.+)?$'),
    ('PATH', '^(.+:)?/root/workspace-go/bin(:.+)?$')
])
def test_go_env(host, name, pattern):
    cmd = host.run('. /etc/profile && printf $' + name)
    assert re.search(pattern, cmd.stdout)
";

pub const EOL_CONVERGE: &str = "---
- name: Converge
  hosts: all

  roles:
    - role: ansible-role-golang
      golang_version: '1.12.13'
";

/// A role checkout inside a temporary directory
pub struct TestRole {
    // Dropping the TempDir removes the checkout
    _temp_dir: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl TestRole {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn versions_dir_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path("vars/versions"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Create a role checkout with checksum files for `versions` (amd64 only)
pub fn create_test_role(versions: &[&str]) -> TestRole {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    let eol_fixture = TEST_FIXTURE.replace("1.10.2", "1.12.13");
    let files = [
        ("README.md", README),
        ("defaults/main.yml", DEFAULTS),
        ("molecule/default/tests/test_role.py", TEST_FIXTURE),
        (
            "molecule/ubuntu-max-go-eol/tests/test_role.py",
            eol_fixture.as_str(),
        ),
        ("molecule/ubuntu-max-go-eol/converge.yml", EOL_CONVERGE),
    ];
    for (relative, content) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    let versions_dir = root.join("vars/versions");
    fs::create_dir_all(&versions_dir).unwrap();
    for version in versions {
        fs::write(
            versions_dir.join(format!("{version}-amd64.yml")),
            format!("---\ngolang_redis_sha256sum: 'existing-{version}'\n"),
        )
        .unwrap();
    }

    TestRole {
        _temp_dir: temp_dir,
        root,
    }
}
