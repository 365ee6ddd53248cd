// コマンド処理の本体
//
// トークン列を Command に分類し（parse_command）、式を展開して
// ファイル操作を呼び出す（execute）。エラーはすべてレポーターに渡し、
// 呼び出し側には続行するかどうかだけを返す

use crate::expression::ExpressionProcessor;
use crate::file_ops::FileOperations;
use crate::model::{ChunkExpr, Command, CommandError, Parsed, ALL_FILES};
use crate::reporting::CommandReporter;

/// 終了を表す制御語
pub const EXIT_WORDS: &[&str] = &["q", "exit"];
/// 画面消去の制御語
pub const CLEAN_WORD: &str = "clean";
/// ヘルプの制御語
pub const HELP_WORD: &str = "help";
/// 作用域マーカー
pub const SCOPE_MARKERS: &[&str] = &["in", "except"];
/// update / copy の区切り語
pub const TO_WORD: &str = "to";

/// update に必要な最小トークン数
const UPDATE_MIN_TOKENS: usize = 5;
/// copy に必要な最小トークン数
const COPY_MIN_TOKENS: usize = 6;

/// コマンドプロセッサ
///
/// ファイル操作・式解析・出力の 3 つを注入して使う。呼び出し間で状態は持たない
pub struct CommandProcessor<F, E, R>
where
    F: FileOperations,
    E: ExpressionProcessor,
    R: CommandReporter,
{
    file_ops: F,
    expressions: E,
    reporter: R,
}

impl<F, E, R> CommandProcessor<F, E, R>
where
    F: FileOperations,
    E: ExpressionProcessor,
    R: CommandReporter,
{
    /// 新しいプロセッサを作成（コンストラクタインジェクション）
    pub fn new(file_ops: F, expressions: E, reporter: R) -> Self {
        Self {
            file_ops,
            expressions,
            reporter,
        }
    }

    pub fn file_ops(&self) -> &F {
        &self.file_ops
    }

    pub fn expressions(&self) -> &E {
        &self.expressions
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// 1 行分のコマンドを処理する。終了コマンドのときだけ false を返す
    pub fn process_command<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        let result = self
            .parse_command(tokens)
            .and_then(|command| self.execute(command));

        match result {
            Ok(keep_running) => keep_running,
            Err(error) => {
                self.reporter.report_error(&error);
                true
            }
        }
    }

    /// トークン列を Command に分類する
    ///
    /// 制御語はトークン列のどこにあっても優先される。フィールドの値が
    /// `exit` などと同じ場合もコマンドとしては制御語として扱われる
    pub fn parse_command<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Command, CommandError> {
        let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();

        let Some(verb) = tokens.first() else {
            return Ok(Command::Noop);
        };

        if tokens.iter().any(|t| EXIT_WORDS.contains(t)) {
            return Ok(Command::Exit);
        }
        if tokens.contains(&CLEAN_WORD) {
            return Ok(Command::Clean);
        }
        if tokens.contains(&HELP_WORD) {
            return Ok(Command::Help);
        }

        match verb.to_lowercase().as_str() {
            "get" => Ok(Self::parse_get(&tokens)),
            "update" => Self::parse_update(&tokens),
            "copy" => Self::parse_copy(&tokens),
            _ => Err(CommandError::unrecognized(*verb)),
        }
    }

    /// 分類済みのコマンドを実行する。終了コマンドのときだけ Ok(false)
    pub fn execute(&self, command: Command) -> Result<bool, CommandError> {
        match command {
            Command::Noop => {}
            Command::Exit => return Ok(false),
            Command::Clean => self.reporter.clear_screen(),
            Command::Help => self.reporter.show_help(),
            Command::Get { fields, filenames } => self.execute_get(&fields, &filenames),
            Command::Update {
                old_field,
                new_field,
                filenames,
            } => self.execute_update(&old_field, &new_field, &filenames),
            Command::Copy {
                key_column,
                source_keys,
                target_keys,
                filenames,
            } => self.execute_copy(&key_column, &source_keys, &target_keys, &filenames)?,
        }
        Ok(true)
    }

    // 作用域マーカーの有無はトークン列全体で判定し（大文字小文字を区別）、
    // ある場合は末尾 2 トークンを作用域とみなす
    fn parse_get(tokens: &[&str]) -> Command {
        let has_scope = tokens.iter().any(|t| SCOPE_MARKERS.contains(t));

        let (fields, filenames) = if has_scope {
            let scope_start = tokens.len().saturating_sub(2);
            let fields = tokens.get(1..scope_start).unwrap_or_default();
            (fields, tokens[scope_start..].join(" "))
        } else {
            (&tokens[1..], ALL_FILES.to_string())
        };

        Command::Get {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            filenames,
        }
    }

    // 長さが足りないか、`to` の位置と作用域マーカーの位置が両方とも外れていれば拒否する
    fn parse_update(tokens: &[&str]) -> Result<Command, CommandError> {
        if tokens.len() < UPDATE_MIN_TOKENS
            || (!Self::is_to(tokens[2]) && !Self::is_scope_marker(tokens[4]))
        {
            return Err(CommandError::missing_scope("update"));
        }

        Ok(Command::Update {
            old_field: tokens[1].to_string(),
            new_field: tokens[3].to_string(),
            filenames: tokens[4..].join(" "),
        })
    }

    fn parse_copy(tokens: &[&str]) -> Result<Command, CommandError> {
        if tokens.len() < COPY_MIN_TOKENS
            || (!Self::is_to(tokens[3]) && !Self::is_scope_marker(tokens[5]))
        {
            return Err(CommandError::missing_scope("copy"));
        }

        Ok(Command::Copy {
            key_column: tokens[1].to_string(),
            source_keys: tokens[2].to_string(),
            target_keys: tokens[4].to_string(),
            filenames: tokens[5..].join(" "),
        })
    }

    fn is_to(token: &str) -> bool {
        token.to_lowercase() == TO_WORD
    }

    fn is_scope_marker(token: &str) -> bool {
        SCOPE_MARKERS.contains(&token.to_lowercase().as_str())
    }

    fn execute_get(&self, fields: &[String], filenames: &str) {
        for field in fields {
            let target = self.parse_chunk(field);
            self.reporter
                .report_search(target.column.as_deref(), &target.values);

            let files = self.file_ops.parse_filenames(filenames);
            if let Err(e) = self.file_ops.search_files(&target, &files) {
                self.reporter
                    .report_error(&CommandError::operation("検索", e));
            }
        }
    }

    fn execute_update(&self, old_field: &str, new_field: &str, filenames: &str) {
        let old = self.parse_chunk(old_field);
        let new = self.parse_chunk(new_field);
        self.reporter
            .report_update(old.column.as_deref(), &old.values, &new.values);

        let files = self.file_ops.parse_filenames(filenames);
        if let Err(e) = self.file_ops.update_files(&old, &new, &files) {
            self.reporter
                .report_error(&CommandError::operation("更新", e));
        }
    }

    /// キーの数が一致しなければ 1 件もコピーしない
    fn execute_copy(
        &self,
        key_column: &str,
        source_keys: &str,
        target_keys: &str,
        filenames: &str,
    ) -> Result<(), CommandError> {
        let source_keys = self.surface(self.expressions.parse_field_exp(source_keys));
        let target_keys = self.surface(self.expressions.parse_field_exp(target_keys));

        if source_keys.len() != target_keys.len() {
            return Err(CommandError::key_count_mismatch(
                source_keys.len(),
                target_keys.len(),
            ));
        }

        for (source_key, target_key) in source_keys.iter().zip(&target_keys) {
            self.reporter.report_copy(source_key, target_key);

            let files = self.file_ops.parse_filenames(filenames);
            if let Err(e) = self
                .file_ops
                .copy_row(key_column, source_key, target_key, &files)
            {
                self.reporter
                    .report_error(&CommandError::operation("行のコピー", e));
            }
        }
        Ok(())
    }

    fn parse_chunk(&self, expression: &str) -> ChunkExpr {
        self.surface(self.expressions.parse_chunk_exp(expression))
    }

    /// 警告があればレポーターに渡し、値だけを返す
    fn surface<T>(&self, parsed: Parsed<T>) -> T {
        let (value, warning) = parsed.into_parts();
        if let Some(warning) = warning {
            self.reporter.report_warning(&warning);
        }
        value
    }
}
