use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::domain::LoanPeriod;

use super::error::CommandError;

/// 任意の入出力に対する1行単位の質問と回答
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// `question`を表示して1行読む
    ///
    /// 改行文字だけを取り除き、それ以外は入力どおりに返す。
    /// 入力が尽きたら`None`
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// `ask`と同じだが、入力が尽きたらエラー
    pub fn ask_text(&mut self, question: &str) -> Result<String, CommandError> {
        self.ask(question)?.ok_or(CommandError::EndOfInput)
    }

    /// 数値を尋ねる
    ///
    /// 前後の空白は無視する。数値として読めなければ操作を中止する。
    pub fn ask_number<T: FromStr>(
        &mut self,
        question: &str,
        field: &'static str,
    ) -> Result<T, CommandError> {
        let answer = self.ask_text(question)?;
        answer
            .trim()
            .parse()
            .map_err(|_| CommandError::MalformedInput {
                field,
                input: answer,
            })
    }

    /// 貸出日数を尋ねる
    ///
    /// 整数ならそのまま使う（0や負の数も含む）。
    /// 空欄や数値として読めない入力は既定値を使う意味で`None`を返す。
    pub fn ask_loan_period(
        &mut self,
        default: LoanPeriod,
    ) -> Result<Option<LoanPeriod>, CommandError> {
        let question = format!(
            "Enter number of days to borrow (default {}): ",
            default.days()
        );
        let answer = self.ask_text(&question)?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }

        match answer.parse::<i64>() {
            Ok(days) => Ok(Some(LoanPeriod::new(days))),
            Err(_) => {
                tracing::debug!(input = %answer, "malformed loan period, using default");
                Ok(None)
            }
        }
    }
}
