//! In-memory page for running the injected script under `boa_engine`.
//!
//! Provides just enough of `document`, `window`, timers and
//! `MutationObserver` for the customization script: attribute, class and
//! tag selectors (optionally followed by `:not(.class)`), `closest`,
//! `textContent`, inline styles and click listeners.

use boa_engine::{Context, Source};
use serde_json::Value;

const DOM_STUB: &str = r#"
var window = globalThis;
var __timers = [];
var __observers = [];

function __matches(el, selector) {
    var not = selector.match(/^(.*):not\(\.([\w-]+)\)$/);
    if (not) {
        return __matches(el, not[1]) && el.classes.indexOf(not[2]) < 0;
    }
    if (selector.charAt(0) === '.') {
        return el.classes.indexOf(selector.slice(1)) >= 0;
    }
    var attr = selector.match(/^\[([\w-]+)="([^"]*)"\]$/);
    if (attr) {
        return el.attrs[attr[1]] === attr[2];
    }
    return el.tagName === selector;
}

function __Element(tag, attrs) {
    var self = this;
    this.tagName = tag;
    this.attrs = attrs || {};
    this.children = [];
    this.parentNode = null;
    this.listeners = {};
    this.text = '';
    this.classes = [];
    var style = {};
    style.setProperty = function (name, value, priority) {
        style[name] = priority ? value + ' !' + priority : value;
    };
    this.style = style;
    this.classList = {
        add: function (name) {
            if (self.classes.indexOf(name) < 0) {
                self.classes.push(name);
            }
        },
        contains: function (name) {
            return self.classes.indexOf(name) >= 0;
        }
    };
}

Object.defineProperty(__Element.prototype, 'className', {
    get: function () { return this.classes.join(' '); },
    set: function (value) {
        this.classes = String(value).split(' ').filter(function (c) { return c.length > 0; });
    }
});

Object.defineProperty(__Element.prototype, 'textContent', {
    get: function () {
        return this.text + this.children.map(function (c) { return c.textContent; }).join('');
    },
    set: function (value) {
        this.children.forEach(function (c) { c.parentNode = null; });
        this.children = [];
        this.text = String(value);
    }
});

__Element.prototype.appendChild = function (child) {
    child.parentNode = this;
    this.children.push(child);
    __observers.forEach(function (o) {
        o.pending.push({ addedNodes: [child] });
    });
    return child;
};

__Element.prototype.querySelectorAll = function (selector) {
    var found = [];
    (function walk(el) {
        el.children.forEach(function (c) {
            if (__matches(c, selector)) {
                found.push(c);
            }
            walk(c);
        });
    })(this);
    return found;
};

__Element.prototype.querySelector = function (selector) {
    var all = this.querySelectorAll(selector);
    return all.length > 0 ? all[0] : null;
};

__Element.prototype.closest = function (selector) {
    for (var el = this; el; el = el.parentNode) {
        if (__matches(el, selector)) {
            return el;
        }
    }
    return null;
};

__Element.prototype.addEventListener = function (type, listener) {
    (this.listeners[type] = this.listeners[type] || []).push(listener);
};

__Element.prototype.click = function () {
    (this.listeners.click || []).forEach(function (l) { l(); });
};

var document = {
    body: new __Element('body'),
    createElement: function (tag) { return new __Element(tag); },
    querySelector: function (selector) { return this.body.querySelector(selector); },
    querySelectorAll: function (selector) { return this.body.querySelectorAll(selector); }
};

function setTimeout(callback, delay) {
    __timers.push({ callback: callback, delay: delay, repeat: false });
}

function setInterval(callback, delay) {
    __timers.push({ callback: callback, delay: delay, repeat: true });
}

var __statusTab = document.body.appendChild(new __Element('div', { 'data-tab': '3' }));
var __communitiesTab = document.body.appendChild(new __Element('div', { 'data-tab': '4' }));
var __chatList = document.body.appendChild(new __Element('div', { id: 'pane-side' }));
var __avatars = [];

function __addRow(name) {
    var row = new __Element('div', { 'data-testid': 'cell-frame-container' });
    if (name !== null) {
        var title = new __Element('span', { 'data-testid': 'cell-frame-title' });
        title.textContent = name;
        row.appendChild(title);
    }
    var avatar = new __Element('div', { 'data-testid': 'avatar' });
    var img = new __Element('img');
    avatar.appendChild(img);
    row.appendChild(avatar);
    __chatList.appendChild(row);
    __avatars.push({ avatar: avatar, img: img });
}

function __runTimers() {
    var due = __timers;
    __timers = due.filter(function (t) { return t.repeat; });
    due.forEach(function (t) { t.callback(); });
}

function __flushObservers() {
    __observers.forEach(function (o) {
        var records = o.pending;
        o.pending = [];
        if (records.length > 0) {
            o.callback(records);
        }
    });
}

function __report() {
    var toggles = document.querySelectorAll('.focus-toggle');
    return JSON.stringify({
        toggles: toggles.length,
        icon: toggles.length > 0 ? toggles[0].textContent : null,
        avatars: __avatars.map(function (a) {
            return {
                text: a.avatar.textContent,
                imgHidden: a.img.style.display === 'none',
                processed: a.avatar.classList.contains('focuschat-processed')
            };
        }),
        tabs: [__statusTab.style.display || null, __communitiesTab.style.display || null],
        intervals: __timers.filter(function (t) { return t.repeat; }).length,
        observers: __observers.filter(function (o) { return o.target === document.body; }).length
    });
}
"#;

const OBSERVER_STUB: &str = r#"
function MutationObserver(callback) {
    this.callback = callback;
    this.pending = [];
    this.target = null;
    __observers.push(this);
}

MutationObserver.prototype.observe = function (target) {
    this.target = target;
};
"#;

/// A fake document with a status tab, a communities tab and a chat list.
pub struct TestPage {
    context: Context,
}

impl TestPage {
    /// `with_observer: false` leaves `MutationObserver` undefined.
    pub fn new(with_observer: bool) -> Self {
        let mut page = Self {
            context: Context::default(),
        };
        page.eval(DOM_STUB);
        if with_observer {
            page.eval(OBSERVER_STUB);
        }
        page
    }

    /// Evaluate `code`, returning its value when it is a string.
    pub fn eval(&mut self, code: &str) -> Option<String> {
        let value = self
            .context
            .eval(Source::from_bytes(code))
            .unwrap_or_else(|e| panic!("script error: {e}"));
        value.as_string().map(|s| s.to_std_string_escaped())
    }

    pub fn run_script(&mut self, script: &str) {
        self.eval(script);
    }

    /// Append a chat row; `None` leaves out the contact title.
    pub fn add_row(&mut self, name: Option<&str>) {
        let name = serde_json::to_string(&name).unwrap();
        self.eval(&format!("__addRow({name});"));
    }

    /// Fire every pending timeout once and every interval once.
    pub fn run_timers(&mut self) {
        self.eval("__runTimers();");
    }

    pub fn flush_observers(&mut self) {
        self.eval("__flushObservers();");
    }

    pub fn click_toggle(&mut self) {
        self.eval("document.querySelector('.focus-toggle').click();");
    }

    /// Overwrite an avatar's text the way a later page render might.
    pub fn set_avatar_text(&mut self, index: usize, text: &str) {
        let text = serde_json::to_string(text).unwrap();
        self.eval(&format!("__avatars[{index}].avatar.textContent = {text};"));
    }

    pub fn report(&mut self) -> Value {
        let json = self.eval("__report()").expect("report is a string");
        serde_json::from_str(&json).unwrap()
    }
}
