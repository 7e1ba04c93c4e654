use super::*;


fn rules(include: &[&str]) -> AreaRuleSet {
    AreaRuleSet::new(include.iter().copied())
}

fn modified(path: &str) -> ChangedFile {
    ChangedFile::modified(path)
}

fn is_matched(file: &ChangedFile, rules: &AreaRuleSet) -> bool {
    classify(file, rules).unwrap().is_matched()
}
